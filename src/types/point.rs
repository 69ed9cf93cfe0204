//! Two-component color coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// A coordinate made of two finite real numbers.
///
/// The two implementations are deliberately separate types: a chromaticity
/// point is never silently read as a hue/saturation pair or vice versa.
pub trait ColorPoint: Copy + Sized {
    /// Build a point from its two components, rejecting NaN and infinities.
    fn from_components(first: f64, second: f64) -> Result<Self>;

    /// The two components in declaration order.
    fn components(&self) -> (f64, f64);

    /// Build a point from a slice that must hold exactly two components.
    fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [first, second] => Self::from_components(*first, *second),
            _ => Err(Error::InvalidArgument(format!(
                "expected 2 components, got {}",
                values.len()
            ))),
        }
    }
}

/// A CIE 1931 chromaticity coordinate.
///
/// Serializes as the bridge's `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct ChromaticityPoint {
    x: f64,
    y: f64,
}

impl ChromaticityPoint {
    /// Create a chromaticity point.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ChromaticityPoint;
    ///
    /// let white = ChromaticityPoint::new(0.3127, 0.329).unwrap();
    /// assert_eq!(white.x(), 0.3127);
    /// assert!(ChromaticityPoint::new(f64::NAN, 0.3).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: Error::check_finite("x", x)?,
            y: Error::check_finite("y", y)?,
        })
    }

    /// Unchecked construction for compile-time constants.
    pub(crate) const fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub(crate) fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl ColorPoint for ChromaticityPoint {
    fn from_components(first: f64, second: f64) -> Result<Self> {
        Self::new(first, second)
    }

    fn components(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl TryFrom<Vec<f64>> for ChromaticityPoint {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl TryFrom<&[f64]> for ChromaticityPoint {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl From<ChromaticityPoint> for [f64; 2] {
    fn from(point: ChromaticityPoint) -> Self {
        [point.x, point.y]
    }
}

impl fmt::Display for ChromaticityPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A hue angle in degrees paired with a saturation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueSatPoint {
    hue: f64,
    sat: f64,
}

impl HueSatPoint {
    pub fn new(hue: f64, sat: f64) -> Result<Self> {
        Ok(Self {
            hue: Error::check_finite("hue", hue)?,
            sat: Error::check_finite("sat", sat)?,
        })
    }

    pub(crate) const fn at(hue: f64, sat: f64) -> Self {
        Self { hue, sat }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn sat(&self) -> f64 {
        self.sat
    }
}

impl ColorPoint for HueSatPoint {
    fn from_components(first: f64, second: f64) -> Result<Self> {
        Self::new(first, second)
    }

    fn components(&self) -> (f64, f64) {
        (self.hue, self.sat)
    }
}

impl TryFrom<&[f64]> for HueSatPoint {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl fmt::Display for HueSatPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.hue, self.sat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_arity() {
        let point = ChromaticityPoint::from_slice(&[0.4, 0.5]).unwrap();
        assert_eq!(point.components(), (0.4, 0.5));

        assert!(matches!(
            ChromaticityPoint::from_slice(&[0.4]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            HueSatPoint::from_slice(&[10.0, 0.5, 1.0]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(HueSatPoint::new(f64::INFINITY, 0.5).is_err());
        assert!(ChromaticityPoint::new(0.1, f64::NAN).is_err());
    }

    #[test]
    fn test_named_accessors() {
        let hs = HueSatPoint::new(240.0, 0.75).unwrap();
        assert_eq!(hs.hue(), 240.0);
        assert_eq!(hs.sat(), 0.75);

        let copy = hs;
        assert_eq!(copy, hs);
    }

    #[test]
    fn test_json_array() {
        let point: ChromaticityPoint = serde_json::from_str("[0.675, 0.322]").unwrap();
        assert_eq!(point.x(), 0.675);
        assert_eq!(point.y(), 0.322);
        assert_eq!(serde_json::to_string(&point).unwrap(), "[0.675,0.322]");

        assert!(serde_json::from_str::<ChromaticityPoint>("[0.675]").is_err());
        assert!(serde_json::from_str::<ChromaticityPoint>("[0.1, 0.2, 0.3]").is_err());
    }
}
