//! Color modes reported by the bridge.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// How a light's current color is expressed, the bridge's `colormode` field.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// Hue and saturation
    Hs,
    /// CIE xy chromaticity
    Xy,
    /// Color temperature in mireds
    Ct,
}
