//! Colors in CIE xyY.

use std::fmt;

use super::{Brightness, ChromaticityPoint, Color, ColorGamut, ColorHsb, Rgb};
use crate::convert::{self, temperature};
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// A chromaticity point with a luminance `Y` in [0, 1].
///
/// This is what the bridge's `xy` field addresses, with the luminance
/// coming from `bri`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorXyy {
    pub(crate) point: ChromaticityPoint,
    pub(crate) luminance: f64,
}

impl ColorXyy {
    /// Create a color from `x`, `y` and luminance `Y`, all in [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{Color, ColorXyy};
    ///
    /// let white = ColorXyy::new(0.3127, 0.329, 1.0).unwrap();
    /// assert_eq!(white.brightness(), 1.0);
    /// assert!(ColorXyy::new(0.3, 1.2, 1.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, luminance: f64) -> Result<Self> {
        Ok(Self {
            point: ChromaticityPoint::at(
                Error::check_range("x", x, 0.0, 1.0)?,
                Error::check_range("y", y, 0.0, 1.0)?,
            ),
            luminance: Error::check_range("luminance", luminance, 0.0, 1.0)?,
        })
    }

    pub fn from_point(point: ChromaticityPoint, luminance: f64) -> Result<Self> {
        Self::new(point.x(), point.y(), luminance)
    }

    /// Build from the bridge's `xy` and `bri` fields.
    pub fn from_wire(point: ChromaticityPoint, brightness: Brightness) -> Result<Self> {
        Self::new(point.x(), point.y(), brightness.normalized())
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn point(&self) -> ChromaticityPoint {
        self.point
    }

    pub fn to_hsb(&self) -> ColorHsb {
        let (hue, sat, brightness) = convert::xyy_to_hsb(&self.point, self.luminance);
        ColorHsb::checked_or_clamped(hue, sat, brightness)
    }

    /// Correlated color temperature in Kelvin (McCamy's approximation).
    pub fn cct(&self) -> f64 {
        temperature::xy_to_cct(&self.point)
    }

    /// The same luminance at the closest chromaticity a light with `gamut`
    /// can reproduce.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ColorGamut, ColorXyy};
    ///
    /// let green = ColorXyy::new(0.17, 0.8, 1.0).unwrap();
    /// let clamped = green.clamp_to(&ColorGamut::C);
    /// assert!((clamped.y() - ColorGamut::C.green().y()).abs() < 1e-9);
    /// assert_eq!(ColorXyy::new(0.3, 0.3, 1.0).unwrap().clamp_to(&ColorGamut::C).x(), 0.3);
    /// ```
    pub fn clamp_to(&self, gamut: &ColorGamut) -> Self {
        Self {
            point: gamut.nearest_color(&self.point),
            luminance: self.luminance,
        }
    }
}

impl Color for ColorXyy {
    fn to_rgb(&self) -> Rgb {
        convert::xyy_to_rgb(&self.point, self.luminance)
    }

    fn brightness(&self) -> f64 {
        self.luminance
    }
}

impl From<ColorHsb> for ColorXyy {
    fn from(color: ColorHsb) -> Self {
        color.to_xyy()
    }
}

impl fmt::Display for ColorXyy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:.3}, y={:.3}, Y={:.3} ({})",
            self.x(),
            self.y(),
            self.luminance,
            self.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_new_range_checks() {
        assert!(ColorXyy::new(0.0, 0.0, 0.0).is_ok());
        assert!(ColorXyy::new(1.0, 1.0, 1.0).is_ok());
        assert!(matches!(
            ColorXyy::new(-0.1, 0.3, 1.0),
            Err(Error::OutOfRange { what: "x", .. })
        ));
        assert!(matches!(
            ColorXyy::new(0.3, 0.3, 1.5),
            Err(Error::OutOfRange { what: "luminance", .. })
        ));
    }

    #[test]
    fn test_from_wire() {
        let point = ChromaticityPoint::new(0.675, 0.322).unwrap();
        let color = ColorXyy::from_wire(point, Brightness::create(127).unwrap()).unwrap();
        assert_eq!(color.brightness(), 0.5);
        assert_eq!(color.point(), point);
    }

    #[test]
    fn test_names() {
        assert_eq!(ColorXyy::new(0.675, 0.322, 1.0).unwrap().name(), "red");
        assert_eq!(ColorXyy::new(0.167, 0.04, 1.0).unwrap().name(), "blue");
        assert_eq!(ColorXyy::new(0.409, 0.518, 1.0).unwrap().name(), "butter");
    }

    #[test]
    fn test_to_hsb() {
        let hsb = ColorXyy::new(0.675, 0.322, 1.0).unwrap().to_hsb();
        assert_abs_diff_eq!(hsb.hue(), 15.692024, epsilon = 1e-5);
        assert_abs_diff_eq!(hsb.sat(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hsb.brightness(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cct_of_warm_white() {
        let warm = ColorXyy::new(0.4594, 0.4105, 1.0).unwrap();
        assert_abs_diff_eq!(warm.cct(), 2705.0, epsilon = 30.0);
    }

    #[test]
    fn test_clamp_keeps_luminance() {
        let color = ColorXyy::new(0.75, 0.3, 0.4).unwrap().clamp_to(&ColorGamut::C);
        assert_eq!(color.point(), ColorGamut::C.red());
        assert_eq!(color.brightness(), 0.4);
    }

    #[test]
    fn test_display() {
        let white = ColorXyy::new(0.3127, 0.329, 1.0).unwrap();
        assert_eq!(white.to_string(), "x=0.313, y=0.329, Y=1.000 (extra pale cyan)");
    }
}
