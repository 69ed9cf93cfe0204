//! Scaling between API units and the bridge's integer units.
//!
//! The bridge encodes hue as 0..=65535, saturation and brightness as
//! 0..=254 (brightness never below 1) and color temperature in mireds.
//! Every conversion here is an explicit linear re-scale.

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Largest bridge hue value; it corresponds to 360 degrees.
pub const HUE_MAX: u16 = 65535;

/// Largest bridge saturation value.
pub const SAT_MAX: u8 = 254;

/// Bridge brightness range.
pub const BRI_MIN: u8 = 1;
pub const BRI_MAX: u8 = 254;

/// Degrees to bridge hue. The angle is wrapped into [0, 360) first.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::wire;
///
/// assert_eq!(wire::hue_to_wire(180.0), 32768);
/// assert_eq!(wire::hue_to_wire(-90.0), wire::hue_to_wire(270.0));
/// ```
pub fn hue_to_wire(degrees: f64) -> u16 {
    let degrees = degrees.rem_euclid(360.0);
    (degrees * f64::from(HUE_MAX) / 360.0)
        .round()
        .clamp(0.0, f64::from(HUE_MAX)) as u16
}

/// Bridge hue to degrees.
pub fn hue_from_wire(hue: u16) -> f64 {
    f64::from(hue) * 360.0 / f64::from(HUE_MAX)
}

/// Normalized saturation to bridge saturation.
pub fn sat_to_wire(sat: f64) -> Result<u8> {
    let sat = Error::check_range("saturation", sat, 0.0, 1.0)?;
    Ok(scale_sat(sat))
}

/// Saturation already known to be in [0, 1].
pub(crate) fn scale_sat(sat: f64) -> u8 {
    (sat.clamp(0.0, 1.0) * f64::from(SAT_MAX)).round() as u8
}

/// Bridge saturation to [0, 1].
pub fn sat_from_wire(sat: u8) -> Result<f64> {
    let sat = Error::check_range("saturation", f64::from(sat), 0.0, f64::from(SAT_MAX))?;
    Ok(sat / f64::from(SAT_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_round_trip() {
        for degrees in [0.0, 1.0, 45.5, 90.0, 180.0, 270.0, 359.99] {
            let back = hue_from_wire(hue_to_wire(degrees));
            // one wire unit is 360/65535 of a degree
            assert!((back - degrees).abs() <= 360.0 / 65535.0, "{degrees} -> {back}");
        }
        for raw in [0, 1, 12345, 65534] {
            assert_eq!(hue_to_wire(hue_from_wire(raw)), raw);
        }
    }

    #[test]
    fn test_hue_wire_bounds() {
        assert_eq!(hue_to_wire(0.0), 0);
        assert_eq!(hue_to_wire(360.0), 0);
        assert_eq!(hue_from_wire(HUE_MAX), 360.0);
    }

    #[test]
    fn test_sat_round_trip() {
        for raw in 0..=SAT_MAX {
            assert_eq!(sat_to_wire(sat_from_wire(raw).unwrap()).unwrap(), raw);
        }
        assert_eq!(sat_to_wire(0.5).unwrap(), 127);
        assert_eq!(sat_to_wire(1.0).unwrap(), 254);
    }

    #[test]
    fn test_sat_out_of_range() {
        assert!(sat_to_wire(1.01).is_err());
        assert!(sat_to_wire(-0.01).is_err());
        assert!(matches!(
            sat_from_wire(255),
            Err(Error::OutOfRange { what: "saturation", .. })
        ));
    }
}
