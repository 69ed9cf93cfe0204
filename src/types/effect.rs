//! Alert and effect modes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One-shot alert effect, the bridge's `alert` field.
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alert {
    /// Stop any running alert
    #[default]
    None,
    /// A single breathe cycle
    Select,
    /// Breathe cycles for 15 seconds
    LSelect,
}

/// Dynamic effect, the bridge's `effect` field.
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Effect {
    #[default]
    None,
    /// Cycle through all hues at the current brightness and saturation
    ColorLoop,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_wire_names() {
        let alerts: Vec<String> = Alert::iter().map(|a| a.to_string()).collect();
        assert_eq!(alerts, ["none", "select", "lselect"]);
        assert_eq!(Effect::ColorLoop.as_ref(), "colorloop");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Alert::from_str("lselect").unwrap(), Alert::LSelect);
        assert_eq!(Effect::from_str("colorloop").unwrap(), Effect::ColorLoop);
        assert!(Effect::from_str("strobe").is_err());
    }

    #[test]
    fn test_json_matches_strum() {
        for effect in Effect::iter() {
            let json = serde_json::to_string(&effect).unwrap();
            assert_eq!(json, format!("\"{effect}\""));
        }
        let alert: Alert = serde_json::from_str("\"select\"").unwrap();
        assert_eq!(alert, Alert::Select);
    }
}
