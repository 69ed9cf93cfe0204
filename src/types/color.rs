//! Behaviour shared by every color representation.

use crate::colorwheel::color_name;
use crate::convert::rgb_to_hsb;

use super::Rgb;

/// A light color that can be displayed and named.
///
/// Brightness is always normalized to [0, 1]; use [`super::Brightness`] to
/// move to and from the bridge's scale.
pub trait Color {
    /// Display-only sRGB rendition of this color.
    fn to_rgb(&self) -> Rgb;

    /// Brightness in [0, 1].
    fn brightness(&self) -> f64;

    /// Human readable name of the closest color wheel entry.
    fn name(&self) -> &'static str {
        let (hue, sat, value) = rgb_to_hsb(&self.to_rgb());
        color_name(hue, sat, value)
    }
}
