//! White color temperature.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, ColorHsb, ColorXyy, Rgb};
use crate::convert::temperature::{cct_to_xy, kelvin_to_mired, mired_to_kelvin};
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// A color temperature in mireds, the bridge's `ct` field.
///
/// Kelvin is the user-facing unit: 1,000,000 / mired. Any non-zero mired
/// can be stored, but lights only accept commands between
/// [`ColorTemperature::DEVICE_MIN_MIRED`] and
/// [`ColorTemperature::DEVICE_MAX_MIRED`], and colors can only be derived
/// for 2000K to 6500K.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u16", into = "u16")]
pub struct ColorTemperature {
    mired: u16,
}

impl ColorTemperature {
    /// Coolest temperature lights accept, about 6536K.
    pub const DEVICE_MIN_MIRED: u16 = 153;
    /// Warmest temperature lights accept, 2000K.
    pub const DEVICE_MAX_MIRED: u16 = 500;

    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorTemperature;
    ///
    /// assert_eq!(ColorTemperature::from_mired(370).unwrap().kelvin(), 2703);
    /// assert!(ColorTemperature::from_mired(0).is_err());
    /// ```
    pub fn from_mired(mired: u16) -> Result<Self> {
        if mired == 0 {
            return Err(Error::out_of_range("mired", 0.0, 1.0, f64::from(u16::MAX)));
        }
        Ok(Self { mired })
    }

    /// Create from Kelvin, rounded to the nearest mired.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorTemperature;
    ///
    /// assert_eq!(ColorTemperature::from_kelvin(2700.0).unwrap().mired(), 370);
    /// assert!(ColorTemperature::from_kelvin(0.0).is_err());
    /// assert!(ColorTemperature::from_kelvin(-2700.0).is_err());
    /// ```
    pub fn from_kelvin(kelvin: f64) -> Result<Self> {
        let mired = kelvin_to_mired(Error::check_finite("kelvin", kelvin)?).round();
        let mired = Error::check_range("mired", mired, 1.0, f64::from(u16::MAX))?;
        Ok(Self {
            mired: mired as u16,
        })
    }

    pub fn mired(&self) -> u16 {
        self.mired
    }

    /// Kelvin, rounded to the nearest integer.
    pub fn kelvin(&self) -> u32 {
        self.kelvin_exact().round() as u32
    }

    pub fn kelvin_exact(&self) -> f64 {
        mired_to_kelvin(f64::from(self.mired))
    }

    /// Whether lights accept this temperature in a command.
    pub fn is_device_range(&self) -> bool {
        (Self::DEVICE_MIN_MIRED..=Self::DEVICE_MAX_MIRED).contains(&self.mired)
    }

    /// Chromaticity of this temperature; fails outside 2000K to 6500K.
    pub fn xy(&self) -> Result<super::ChromaticityPoint> {
        cct_to_xy(self.kelvin_exact())
    }

    pub fn to_xyy(&self, brightness: f64) -> Result<ColorXyy> {
        ColorXyy::from_point(self.xy()?, brightness)
    }

    /// Display color at full brightness.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorTemperature;
    ///
    /// let warm = ColorTemperature::from_mired(370).unwrap();
    /// assert_eq!(warm.to_rgb().unwrap().to_hex(), "#ffce76");
    /// ```
    pub fn to_rgb(&self) -> Result<Rgb> {
        Ok(self.to_xyy(1.0)?.to_rgb())
    }

    pub fn to_hsb(&self) -> Result<ColorHsb> {
        Ok(self.to_xyy(1.0)?.to_hsb())
    }

    pub fn name(&self) -> Result<&'static str> {
        Ok(self.to_xyy(1.0)?.name())
    }
}

impl TryFrom<u16> for ColorTemperature {
    type Error = Error;

    fn try_from(mired: u16) -> Result<Self> {
        Self::from_mired(mired)
    }
}

impl From<ColorTemperature> for u16 {
    fn from(temperature: ColorTemperature) -> Self {
        temperature.mired
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.kelvin())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_kelvin_mired_round_trip() {
        for mired in [153, 200, 370, 500] {
            let temperature = ColorTemperature::from_mired(mired).unwrap();
            let back = ColorTemperature::from_kelvin(temperature.kelvin_exact()).unwrap();
            assert_eq!(back.mired(), mired);
        }
    }

    #[test]
    fn test_from_kelvin_bounds() {
        assert_eq!(ColorTemperature::from_kelvin(1_000_000.0).unwrap().mired(), 1);
        assert!(ColorTemperature::from_kelvin(5_000_000.0).is_err());
        assert!(ColorTemperature::from_kelvin(10.0).is_err());
        assert!(ColorTemperature::from_kelvin(f64::NAN).is_err());
    }

    #[test]
    fn test_device_range() {
        assert!(ColorTemperature::from_mired(153).unwrap().is_device_range());
        assert!(ColorTemperature::from_mired(500).unwrap().is_device_range());
        assert!(!ColorTemperature::from_mired(152).unwrap().is_device_range());
        assert!(!ColorTemperature::from_mired(501).unwrap().is_device_range());
    }

    #[test]
    fn test_xy() {
        let xy = ColorTemperature::from_mired(250).unwrap().xy().unwrap();
        assert_abs_diff_eq!(xy.x(), 0.380438429, epsilon = 1e-9);
        assert_abs_diff_eq!(xy.y(), 0.37674607, epsilon = 1e-9);
    }

    #[test]
    fn test_outside_table_fails() {
        // 153 mired is about 6536K, past the end of the table
        let cool = ColorTemperature::from_mired(153).unwrap();
        assert!(matches!(
            cool.xy(),
            Err(Error::OutOfRange { what: "color temperature", .. })
        ));
        assert!(cool.name().is_err());
        assert!(ColorTemperature::from_mired(154).unwrap().xy().is_ok());
    }

    #[test]
    fn test_names() {
        assert_eq!(ColorTemperature::from_mired(370).unwrap().name().unwrap(), "buff");
        assert_eq!(ColorTemperature::from_mired(250).unwrap().name().unwrap(), "pale buff");
        assert_eq!(ColorTemperature::from_mired(154).unwrap().name().unwrap(), "powder blue");
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorTemperature::from_mired(370).unwrap().to_string(), "2703K");
        assert_eq!(ColorTemperature::from_mired(500).unwrap().to_string(), "2000K");
    }

    #[test]
    fn test_json() {
        let ct: ColorTemperature = serde_json::from_str("366").unwrap();
        assert_eq!(ct.mired(), 366);
        assert!(serde_json::from_str::<ColorTemperature>("0").is_err());
    }
}
