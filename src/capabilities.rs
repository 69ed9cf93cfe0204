//! Light capabilities reported by the bridge.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;
use crate::types::{ColorGamut, ColorMode, ColorTemperature};

type Result<T> = std::result::Result<T, Error>;

/// The `capabilities` object of a light.
///
/// ```json
/// {"certified": true,
///  "control": {"mindimlevel": 1000, "maxlumen": 806, "colorgamuttype": "C",
///              "colorgamut": [[0.6915, 0.3083], [0.17, 0.7], [0.1532, 0.0475]],
///              "ct": {"min": 153, "max": 500}}}
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightCapabilities {
    #[serde(default)]
    pub certified: bool,
    #[serde(default)]
    pub control: ControlCapabilities,
}

/// The `control` part of [`LightCapabilities`].
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ControlCapabilities {
    #[serde(default)]
    pub mindimlevel: Option<u32>,
    #[serde(default)]
    pub maxlumen: Option<u32>,
    #[serde(default)]
    pub colorgamuttype: Option<String>,
    #[serde(default)]
    pub colorgamut: Option<ColorGamut>,
    #[serde(default)]
    pub ct: Option<MiredRange>,
}

/// Inclusive range of color temperatures in mireds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MiredRange {
    pub min: u16,
    pub max: u16,
}

impl MiredRange {
    pub fn contains(&self, temperature: &ColorTemperature) -> bool {
        (self.min..=self.max).contains(&temperature.mired())
    }

    /// The closest temperature inside this range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ColorTemperature, MiredRange};
    ///
    /// let range = MiredRange { min: 153, max: 454 };
    /// let warm = ColorTemperature::from_kelvin(2000.0).unwrap();
    /// assert_eq!(range.clamp(&warm).unwrap().mired(), 454);
    /// ```
    pub fn clamp(&self, temperature: &ColorTemperature) -> Result<ColorTemperature> {
        let (low, high) = (self.min.min(self.max), self.min.max(self.max));
        ColorTemperature::from_mired(temperature.mired().clamp(low, high))
    }
}

impl LightCapabilities {
    /// Parse the capabilities object from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }

    /// Color modes the light can be commanded in.
    ///
    /// Color temperature needs a `ct` range; hue/saturation and xy need a
    /// gamut, either explicit or by type letter.
    pub fn color_modes(&self) -> BTreeSet<ColorMode> {
        let mut modes = BTreeSet::new();
        if self.control.ct.is_some() {
            modes.insert(ColorMode::Ct);
        }
        if self.control.colorgamut.is_some() || self.control.colorgamuttype.is_some() {
            modes.insert(ColorMode::Xy);
            modes.insert(ColorMode::Hs);
        }
        modes
    }

    pub fn supports(&self, mode: ColorMode) -> bool {
        self.color_modes().contains(&mode)
    }

    /// Whether the device emits light at all; smart plugs report no lumens.
    pub fn is_dimmable(&self) -> bool {
        self.control.maxlumen.is_some()
    }

    /// The light's gamut: the explicit triangle if reported, else the
    /// published gamut for its type letter, else the full triangle.
    pub fn gamut(&self) -> ColorGamut {
        if let Some(gamut) = self.control.colorgamut {
            return gamut;
        }
        self.control
            .colorgamuttype
            .as_deref()
            .and_then(ColorGamut::from_gamut_type)
            .unwrap_or_default()
    }

    pub fn ct_range(&self) -> Option<MiredRange> {
        self.control.ct
    }

    pub fn max_lumen(&self) -> Option<u32> {
        self.control.maxlumen
    }

    pub fn min_dim_level(&self) -> Option<u32> {
        self.control.mindimlevel
    }
}
