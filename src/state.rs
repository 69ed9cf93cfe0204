//! Light state reported by the bridge.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;
use crate::types::{
    Alert, Brightness, ChromaticityPoint, Color, ColorHsb, ColorMode, ColorTemperature, ColorXyy, Effect, Rgb,
};

type Result<T> = std::result::Result<T, Error>;

/// The `state` object of a light, in raw bridge units.
///
/// Use [`LightState::color`] to get the current color as a typed value.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightState {
    #[serde(default)]
    pub on: bool,
    pub bri: Option<u8>,
    pub hue: Option<u16>,
    pub sat: Option<u8>,
    pub xy: Option<ChromaticityPoint>,
    pub ct: Option<u16>,
    pub colormode: Option<ColorMode>,
    pub alert: Option<Alert>,
    pub effect: Option<Effect>,
    pub mode: Option<String>,
    #[serde(default)]
    pub reachable: bool,
}

/// A light's current color in whichever mode it is in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightColor {
    Hsb(ColorHsb),
    Xy(ColorXyy),
    Temperature(ColorTemperature),
}

impl LightColor {
    /// Display color. Temperatures outside 2000K to 6500K have none.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            LightColor::Hsb(color) => Ok(color.to_rgb()),
            LightColor::Xy(color) => Ok(color.to_rgb()),
            LightColor::Temperature(temperature) => temperature.to_rgb(),
        }
    }

    pub fn name(&self) -> Result<&'static str> {
        match self {
            LightColor::Hsb(color) => Ok(color.name()),
            LightColor::Xy(color) => Ok(color.name()),
            LightColor::Temperature(temperature) => temperature.name(),
        }
    }
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightColor::Hsb(color) => write!(f, "{color}"),
            LightColor::Xy(color) => write!(f, "{color}"),
            LightColor::Temperature(temperature) => write!(f, "{temperature}"),
        }
    }
}

impl LightState {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }

    /// Brightness; full if the light does not report one.
    pub fn brightness(&self) -> Brightness {
        self.bri
            .map_or_else(Brightness::new, |bri| Brightness::saturating(f64::from(bri) / 254.0))
    }

    /// The mode the light's color is expressed in.
    ///
    /// Without an explicit `colormode` it is inferred from the fields
    /// present: color temperature first, then xy, then hue.
    pub fn color_mode(&self) -> Option<ColorMode> {
        if self.colormode.is_some() {
            return self.colormode;
        }

        let inferred = if self.ct.is_some() {
            Some(ColorMode::Ct)
        } else if self.xy.is_some() {
            Some(ColorMode::Xy)
        } else if self.hue.is_some() {
            Some(ColorMode::Hs)
        } else {
            None
        };
        if let Some(mode) = inferred {
            debug!("no colormode in light state, inferred {}", mode);
        }
        inferred
    }

    /// The current color, or `None` for lights without a color mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{LightColor, LightState};
    ///
    /// let state = LightState::from_json(
    ///     r#"{"on": true, "bri": 254, "ct": 370, "colormode": "ct", "reachable": true}"#,
    /// )
    /// .unwrap();
    /// match state.color().unwrap() {
    ///     Some(LightColor::Temperature(ct)) => assert_eq!(ct.kelvin(), 2703),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn color(&self) -> Result<Option<LightColor>> {
        let Some(mode) = self.color_mode() else {
            return Ok(None);
        };
        let brightness = self.brightness();

        let color = match mode {
            ColorMode::Hs => match (self.hue, self.sat) {
                (Some(hue), Some(sat)) => LightColor::Hsb(ColorHsb::from_wire(hue, sat, brightness)?),
                _ => return Err(Error::invalid_argument("hs color mode without hue and sat")),
            },
            ColorMode::Xy => match self.xy {
                Some(point) => LightColor::Xy(ColorXyy::from_wire(point, brightness)?),
                None => return Err(Error::invalid_argument("xy color mode without xy")),
            },
            ColorMode::Ct => match self.ct {
                Some(mired) => LightColor::Temperature(ColorTemperature::from_mired(mired)?),
                None => return Err(Error::invalid_argument("ct color mode without ct")),
            },
        };
        Ok(Some(color))
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.reachable {
            return f.write_str("unreachable");
        }
        if !self.on {
            return f.write_str("off");
        }

        write!(f, "on bri={}", self.brightness().value())?;
        if let Ok(Some(color)) = self.color() {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const EXTENDED_COLOR: &str = r#"{
        "on": true,
        "bri": 127,
        "hue": 21845,
        "sat": 254,
        "effect": "none",
        "xy": [0.409, 0.518],
        "ct": 153,
        "alert": "select",
        "colormode": "hs",
        "mode": "homeautomation",
        "reachable": true
    }"#;

    #[test]
    fn test_parse() {
        let state = LightState::from_json(EXTENDED_COLOR).unwrap();
        assert!(state.on);
        assert!(state.reachable);
        assert_eq!(state.brightness().value(), 127);
        assert_eq!(state.colormode, Some(ColorMode::Hs));
        assert_eq!(state.alert, Some(Alert::Select));
        assert_eq!(state.effect, Some(Effect::None));
        assert_eq!(state.mode.as_deref(), Some("homeautomation"));
    }

    #[test]
    fn test_explicit_mode_wins() {
        let state = LightState::from_json(EXTENDED_COLOR).unwrap();
        let Some(LightColor::Hsb(color)) = state.color().unwrap() else {
            panic!("expected hs color");
        };
        assert_abs_diff_eq!(color.hue(), 120.0, epsilon = 1e-9);
        assert_eq!(color.sat(), 1.0);
        assert_eq!(color.brightness(), 0.5);
    }

    #[test]
    fn test_inferred_mode() {
        let mut state = LightState::from_json(EXTENDED_COLOR).unwrap();
        state.colormode = None;
        assert_eq!(state.color_mode(), Some(ColorMode::Ct));
        state.ct = None;
        assert_eq!(state.color_mode(), Some(ColorMode::Xy));
        state.xy = None;
        assert_eq!(state.color_mode(), Some(ColorMode::Hs));
        state.hue = None;
        assert_eq!(state.color_mode(), None);
        assert_eq!(state.color().unwrap(), None);
    }

    #[test]
    fn test_missing_brightness_is_full() {
        let state = LightState::from_json(r#"{"on": true, "xy": [0.3127, 0.329], "reachable": true}"#).unwrap();
        let Some(LightColor::Xy(color)) = state.color().unwrap() else {
            panic!("expected xy color");
        };
        assert_eq!(color.brightness(), 1.0);
    }

    #[test]
    fn test_mode_without_fields() {
        let state = LightState::from_json(r#"{"on": true, "colormode": "xy"}"#).unwrap();
        assert!(matches!(state.color(), Err(Error::InvalidArgument(_))));
        let state = LightState::from_json(r#"{"on": true, "colormode": "hs", "hue": 100}"#).unwrap();
        assert!(matches!(state.color(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_light_color_name() {
        let warm = LightColor::Temperature(ColorTemperature::from_mired(370).unwrap());
        assert_eq!(warm.name().unwrap(), "buff");
        assert_eq!(warm.to_rgb().unwrap().to_hex(), "#ffce76");

        let cool = LightColor::Temperature(ColorTemperature::from_mired(153).unwrap());
        assert!(matches!(cool.name(), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_display() {
        let state = LightState::from_json(r#"{"on": true, "bri": 254, "ct": 370, "reachable": true}"#).unwrap();
        assert_eq!(state.to_string(), "on bri=254 2703K");

        let off = LightState::from_json(r#"{"on": false, "reachable": true}"#).unwrap();
        assert_eq!(off.to_string(), "off");

        let gone = LightState::from_json(r#"{"on": true, "reachable": false}"#).unwrap();
        assert_eq!(gone.to_string(), "unreachable");
    }

    #[test]
    fn test_serialize_skips_missing() {
        let state = LightState::from_json(r#"{"on": true, "ct": 370}"#).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"on": true, "ct": 370, "reachable": false}));
    }
}
