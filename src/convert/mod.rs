//! Stateless color space conversions.
//!
//! All functions are pure. RGB values are sRGB in [0, 1], hue is in degrees,
//! saturation and brightness are normalized to [0, 1].
//!
//! The linear RGB <-> XYZ matrices are the ones Philips publishes for Hue
//! lights. They are not exact inverses of each other, so an RGB -> xyY -> RGB
//! round trip drifts by up to about 2% on mid-range colors.

use log::trace;

use crate::errors::Error;
use crate::types::{ChromaticityPoint, Rgb};

pub mod temperature;

type Result<T> = std::result::Result<T, Error>;

/// Substitute for `y == 0` in xyY -> XYZ, so the result is a saturated color
/// rather than black.
const Y_EPSILON: f64 = 0.00001;

/// Decode one sRGB channel to linear light.
pub fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear channel to sRGB.
pub fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert sRGB to a chromaticity and luminance.
///
/// Black has no chromaticity and comes back as `(0, 0)` with `Y = 0`.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::{Rgb, convert};
///
/// let (point, luminance) = convert::rgb_to_xyy(&Rgb::from_bytes(255, 255, 255));
/// assert!((point.x() - 0.3127).abs() < 1e-3);
/// assert!((luminance - 1.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyy(rgb: &Rgb) -> (ChromaticityPoint, f64) {
    let r = srgb_to_linear(rgb.red);
    let g = srgb_to_linear(rgb.green);
    let b = srgb_to_linear(rgb.blue);

    let x = r * 0.649926 + g * 0.103455 + b * 0.197109;
    let y = r * 0.234327 + g * 0.743075 + b * 0.022598;
    let z = g * 0.053077 + b * 1.035763;

    let total = x + y + z;
    if total == 0.0 {
        return (ChromaticityPoint::at(0.0, 0.0), y);
    }

    (ChromaticityPoint::at(x / total, y / total), y)
}

/// Convert a chromaticity and luminance to sRGB.
///
/// Colors outside sRGB are brought back with [`normalize_rgb`], once on the
/// linear values and once after gamma encoding, and whatever remains outside
/// [0, 1] is clamped. This is a cheap overflow policy, not gamut mapping;
/// use [`crate::ColorGamut::nearest_color`] to map into a light's gamut.
pub fn xyy_to_rgb(point: &ChromaticityPoint, luminance: f64) -> Rgb {
    let x = point.x();
    let z = 1.0 - x - point.y();
    let y = if point.y() == 0.0 { Y_EPSILON } else { point.y() };

    let cx = (luminance / y) * x;
    let cy = luminance;
    let cz = (luminance / y) * z;

    let r = cx * 1.656492 - cy * 0.354851 - cz * 0.255038;
    let g = -cx * 0.707196 + cy * 1.655397 + cz * 0.036152;
    let b = cx * 0.051713 - cy * 0.121364 + cz * 1.011530;

    let (r, g, b) = normalize_rgb(r, g, b);
    let (r, g, b) = normalize_rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b));

    Rgb::clamped(r, g, b)
}

/// Pull an overflowing triple back towards [0, 1].
///
/// When one channel is above 1.0 and strictly the largest, it becomes 1.0
/// and the other two are divided by its original value. Anything else is
/// returned untouched, including negative channels and ties.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::convert::normalize_rgb;
///
/// assert_eq!(normalize_rgb(2.0, 1.0, 0.5), (1.0, 0.5, 0.25));
/// assert_eq!(normalize_rgb(0.9, 0.2, 0.1), (0.9, 0.2, 0.1));
/// ```
pub fn normalize_rgb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    if r > 1.0 && r > g && r > b {
        trace!("normalizing rgb overflow on red: {r}");
        (1.0, g / r, b / r)
    } else if g > 1.0 && g > r && g > b {
        trace!("normalizing rgb overflow on green: {g}");
        (r / g, 1.0, b / g)
    } else if b > 1.0 && b > r && b > g {
        trace!("normalizing rgb overflow on blue: {b}");
        (r / b, g / b, 1.0)
    } else {
        (r, g, b)
    }
}

/// Convert hue (degrees), saturation and brightness to sRGB.
///
/// Hue wraps modulo 360. Saturation and brightness must be in [0, 1].
///
/// # Examples
///
/// ```
/// use hue_lights_rs::convert::hsb_to_rgb;
///
/// let rgb = hsb_to_rgb(480.0, 1.0, 1.0).unwrap();
/// assert_eq!(rgb.to_bytes(), [0, 255, 0]);
/// assert!(hsb_to_rgb(0.0, 1.5, 1.0).is_err());
/// ```
pub fn hsb_to_rgb(hue: f64, sat: f64, brightness: f64) -> Result<Rgb> {
    let hue = Error::check_finite("hue", hue)?;
    let sat = Error::check_range("saturation", sat, 0.0, 1.0)?;
    let brightness = Error::check_range("brightness", brightness, 0.0, 1.0)?;
    Ok(hexcone_to_rgb(hue, sat, brightness))
}

/// The HSV hexcone transform, for inputs that are already validated.
pub(crate) fn hexcone_to_rgb(hue: f64, sat: f64, v: f64) -> Rgb {
    let mut h = hue.rem_euclid(360.0) / 60.0;
    // rem_euclid can round a tiny negative hue up to exactly 360
    if h >= 6.0 {
        h = 0.0;
    }
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - sat);
    let q = v * (1.0 - sat * f);
    let t = v * (1.0 - sat * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::clamped(r, g, b)
}

/// Convert sRGB to hue (degrees in [0, 360)), saturation and brightness.
///
/// Achromatic colors have no hue and report `(0, 0, v)`.
pub fn rgb_to_hsb(rgb: &Rgb) -> (f64, f64, f64) {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return (0.0, 0.0, max);
    }

    let delta = max - min;
    let sat = delta / max;
    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0) * 360.0, sat, max)
}

pub fn hsb_to_xyy(hue: f64, sat: f64, brightness: f64) -> Result<(ChromaticityPoint, f64)> {
    hsb_to_rgb(hue, sat, brightness).map(|rgb| rgb_to_xyy(&rgb))
}

pub fn xyy_to_hsb(point: &ChromaticityPoint, luminance: f64) -> (f64, f64, f64) {
    rgb_to_hsb(&xyy_to_rgb(point, luminance))
}

/// Linearly re-scale `value` from one range to another, clamping the result
/// into the output range.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::convert::map_range;
///
/// assert_eq!(map_range(127.0, (0.0, 254.0), (0.0, 1.0)), 0.5);
/// assert_eq!(map_range(300.0, (0.0, 254.0), (0.0, 1.0)), 1.0);
/// ```
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let scaled = to.0 + ((to.1 - to.0) / (from.1 - from.0)) * (value - from.0);
    if scaled > to.1 {
        to.1
    } else if scaled < to.0 {
        to.0
    } else {
        scaled
    }
}
