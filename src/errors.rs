/// All error types that can occur when converting Hue colors or building bridge payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A constructor got the wrong number of components or a non-finite number.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value fell outside the domain it is defined on.
    #[error("{what} {value} out of range [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A gamut edge has zero length.
    #[error("degenerate gamut edge at ({x}, {y})")]
    DegenerateGeometry { x: f64, y: f64 },

    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// Attempted to serialize a [`crate::StateChange`] with no attributes set.
    #[error("invalid state change; no attributes set")]
    NoAttribute,

    /// Failed to parse a [`crate::Rgb`] from a string.
    #[error("invalid color string: {0}")]
    InvalidColorString(String),
}

impl Error {
    /// Create a new out of range error
    pub fn out_of_range(what: &'static str, value: f64, min: f64, max: f64) -> Self {
        Error::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(reason: &str) -> Self {
        Error::InvalidArgument(reason.to_string())
    }

    /// Fails with [`Error::OutOfRange`] unless `min <= value <= max`.
    pub(crate) fn check_range(what: &'static str, value: f64, min: f64, max: f64) -> Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Error::out_of_range(what, value, min, max))
        }
    }

    pub(crate) fn check_finite(what: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::InvalidArgument(format!("{what} must be finite, got {value}")))
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert_eq!(Error::check_range("saturation", 0.5, 0.0, 1.0).unwrap(), 0.5);
        assert_eq!(Error::check_range("saturation", 1.0, 0.0, 1.0).unwrap(), 1.0);
        assert_eq!(
            Error::check_range("saturation", 1.5, 0.0, 1.0).unwrap_err(),
            Error::out_of_range("saturation", 1.5, 0.0, 1.0)
        );
        // NaN is never inside a range
        assert!(Error::check_range("saturation", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert!(Error::check_finite("x", 0.3).is_ok());
        assert!(matches!(
            Error::check_finite("x", f64::INFINITY),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        let err = Error::out_of_range("kelvin", 1500.0, 2000.0, 6500.0);
        assert_eq!(err.to_string(), "kelvin 1500 out of range [2000, 6500]");
    }
}
