//! Hue, saturation and brightness.

use std::fmt;

use super::{Brightness, Color, ColorXyy, HueSatPoint, Rgb};
use crate::colorwheel::color_name;
use crate::convert::{self, temperature};
use crate::errors::Error;
use crate::wire;

type Result<T> = std::result::Result<T, Error>;

/// A color as hue in degrees [0, 360), saturation and brightness in [0, 1].
///
/// The bridge's `hue`/`sat`/`bri` fields, in user-facing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorHsb {
    hue: f64,
    sat: f64,
    brightness: f64,
}

impl ColorHsb {
    /// Create a color. The hue wraps modulo 360.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorHsb;
    ///
    /// let violet = ColorHsb::new(-90.0, 1.0, 1.0).unwrap();
    /// assert_eq!(violet.hue(), 270.0);
    /// assert!(ColorHsb::new(0.0, 1.1, 1.0).is_err());
    /// assert!(ColorHsb::new(f64::INFINITY, 1.0, 1.0).is_err());
    /// ```
    pub fn new(hue: f64, sat: f64, brightness: f64) -> Result<Self> {
        let hue = Error::check_finite("hue", hue)?;
        Ok(Self {
            hue: wrap_hue(hue),
            sat: Error::check_range("saturation", sat, 0.0, 1.0)?,
            brightness: Error::check_range("brightness", brightness, 0.0, 1.0)?,
        })
    }

    pub fn from_point(point: HueSatPoint, brightness: f64) -> Result<Self> {
        Self::new(point.hue(), point.sat(), brightness)
    }

    /// Build from the bridge's `hue`, `sat` and `bri` fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{Brightness, ColorHsb};
    ///
    /// let color = ColorHsb::from_wire(21845, 254, Brightness::new()).unwrap();
    /// assert!((color.hue() - 120.0).abs() < 1e-9);
    /// assert!(ColorHsb::from_wire(0, 255, Brightness::new()).is_err());
    /// ```
    pub fn from_wire(hue: u16, sat: u8, brightness: Brightness) -> Result<Self> {
        Self::new(
            wire::hue_from_wire(hue),
            wire::sat_from_wire(sat)?,
            brightness.normalized(),
        )
    }

    /// For values produced by the conversions, which are in range up to
    /// rounding.
    pub(crate) fn checked_or_clamped(hue: f64, sat: f64, brightness: f64) -> Self {
        let hue = if hue.is_finite() { wrap_hue(hue) } else { 0.0 };
        Self {
            hue,
            sat: sat.clamp(0.0, 1.0),
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn sat(&self) -> f64 {
        self.sat
    }

    pub fn point(&self) -> HueSatPoint {
        HueSatPoint::at(self.hue, self.sat)
    }

    pub fn to_xyy(&self) -> ColorXyy {
        let (point, luminance) = convert::rgb_to_xyy(&self.to_rgb());
        ColorXyy { point, luminance }
    }

    /// Correlated color temperature in Kelvin of this color's chromaticity.
    pub fn cct(&self) -> f64 {
        temperature::xy_to_cct(&self.to_xyy().point)
    }

    /// The bridge's `hue`, `sat` and `bri` values for this color.
    pub fn to_wire(&self) -> (u16, u8, Brightness) {
        (
            wire::hue_to_wire(self.hue),
            wire::scale_sat(self.sat),
            Brightness::saturating(self.brightness),
        )
    }
}

fn wrap_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    // a tiny negative hue can wrap to exactly 360
    if hue >= 360.0 { 0.0 } else { hue }
}

impl Color for ColorHsb {
    fn to_rgb(&self) -> Rgb {
        convert::hexcone_to_rgb(self.hue, self.sat, self.brightness)
    }

    fn brightness(&self) -> f64 {
        self.brightness
    }

    fn name(&self) -> &'static str {
        color_name(self.hue, self.sat, self.brightness)
    }
}

impl From<ColorXyy> for ColorHsb {
    fn from(color: ColorXyy) -> Self {
        color.to_hsb()
    }
}

impl fmt::Display for ColorHsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hue={:.1}, sat={:.3}, bri={:.3} ({})",
            self.hue,
            self.sat,
            self.brightness,
            self.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_hue_wraps() {
        assert_eq!(ColorHsb::new(360.0, 1.0, 1.0).unwrap().hue(), 0.0);
        assert_eq!(ColorHsb::new(480.0, 1.0, 1.0).unwrap().hue(), 120.0);
        assert_eq!(ColorHsb::new(-1e-20, 1.0, 1.0).unwrap().hue(), 0.0);
    }

    #[test]
    fn test_wire_round_trip() {
        let color = ColorHsb::from_wire(12345, 200, Brightness::create(100).unwrap()).unwrap();
        let (hue, sat, bri) = color.to_wire();
        assert_eq!(hue, 12345);
        assert_eq!(sat, 200);
        assert_eq!(bri.value(), 100);
    }

    #[test]
    fn test_wire_full_hue_is_red() {
        let color = ColorHsb::from_wire(65535, 254, Brightness::new()).unwrap();
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.name(), "red");
    }

    #[test]
    fn test_to_wire_clamps_dark_brightness() {
        let (_, _, bri) = ColorHsb::new(0.0, 0.0, 0.0).unwrap().to_wire();
        assert_eq!(bri.value(), 1);
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(ColorHsb::new(0.0, 1.0, 1.0).unwrap().to_rgb().to_bytes(), [255, 0, 0]);
        assert_eq!(ColorHsb::new(30.0, 0.5, 1.0).unwrap().to_rgb().to_bytes(), [255, 191, 128]);
    }

    #[test]
    fn test_to_xyy() {
        let red = ColorHsb::new(0.0, 1.0, 1.0).unwrap().to_xyy();
        assert_abs_diff_eq!(red.x(), 0.735, epsilon = 1e-6);
        assert_abs_diff_eq!(red.y(), 0.265, epsilon = 1e-6);
        assert_abs_diff_eq!(red.brightness(), 0.234327, epsilon = 1e-9);
    }

    #[test]
    fn test_cct() {
        let peach = ColorHsb::new(30.0, 0.5, 1.0).unwrap();
        assert_abs_diff_eq!(peach.cct(), 2497.0, epsilon = 1.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(ColorHsb::new(120.0, 1.0, 1.0).unwrap().name(), "granny smith");
        assert_eq!(ColorHsb::new(120.0, 1.0, 0.5).unwrap().name(), "green");
        assert_eq!(ColorHsb::new(240.0, 1.0, 1.0).unwrap().name(), "blue");
    }

    #[test]
    fn test_round_trip_through_xyy() {
        let color = ColorHsb::new(200.0, 0.5, 0.8).unwrap();
        let back = ColorHsb::from(ColorXyy::from(color));
        assert_abs_diff_eq!(back.hue(), color.hue(), epsilon = 3.0);
        assert_abs_diff_eq!(back.sat(), color.sat(), epsilon = 5e-2);
        assert_abs_diff_eq!(back.brightness(), color.brightness(), epsilon = 2e-2);
    }

    #[test]
    fn test_display() {
        let color = ColorHsb::new(240.0, 1.0, 0.33).unwrap();
        assert_eq!(color.to_string(), "hue=240.0, sat=1.000, bri=0.330 (navy)");
    }
}
