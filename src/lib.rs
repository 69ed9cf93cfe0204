//! # hue_lights_rs
//!
//! The color side of the Philips Hue bridge API: color spaces, gamuts, color
//! temperature, human readable color names and the light state JSON that
//! carries them.
//!
//! This crate does no I/O. It parses what the bridge reports for a light and
//! builds what you send back; the HTTP transport is up to you.
//!
//! ## Quick Start
//!
//! ```
//! use hue_lights_rs::{ColorXyy, LightCapabilities, LightState, StateChange};
//!
//! let caps = LightCapabilities::from_json(
//!     r#"{"control": {"maxlumen": 806, "colorgamuttype": "C", "ct": {"min": 153, "max": 500}}}"#,
//! )?;
//! let state = LightState::from_json(
//!     r#"{"on": true, "bri": 254, "xy": [0.675, 0.322], "colormode": "xy", "reachable": true}"#,
//! )?;
//!
//! let color = state.color()?.expect("light has a color");
//! assert_eq!(color.name()?, "red");
//!
//! // Ask for a green the light can actually show
//! let green = ColorXyy::new(0.17, 0.8, 0.5)?;
//! let mut change = StateChange::new();
//! change.color_xyy(&green, Some(&caps.gamut()))?;
//! let body = change.to_json()?;
//! # assert!(body.contains("\"xy\""));
//! # Ok::<(), hue_lights_rs::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Color spaces**: sRGB, CIE xyY and HSB with conversions in [`convert`]
//! - **Gamuts**: Project colors into a light's [`ColorGamut`]
//! - **Color temperature**: Mireds and Kelvin with [`ColorTemperature`]
//! - **Color names**: Name any color with [`color_name`] or [`Color::name`]
//! - **Bridge units**: Explicit scaling in [`wire`] and [`Brightness`]
//! - **Light state**: Parse [`LightCapabilities`] and [`LightState`]
//! - **Commands**: Build state change bodies with [`StateChange`]
//!
//! ## Units
//!
//! The API works in degrees, Kelvin and normalized [0, 1] values. The bridge
//! uses 0 to 65535 for hue, 0 to 254 for saturation, 1 to 254 for
//! brightness and mireds for color temperature. RGB is only ever used for
//! display.

mod capabilities;
mod colorwheel;
pub mod convert;
mod errors;
mod state;
mod state_change;
mod types;
pub mod wire;

// Re-export public API
pub use capabilities::{ControlCapabilities, LightCapabilities, MiredRange};
pub use colorwheel::color_name;
pub use errors::Error;
pub use state::{LightColor, LightState};
pub use state_change::StateChange;
pub use types::{
    Alert, Brightness, ChromaticityPoint, Color, ColorGamut, ColorHsb, ColorMode, ColorPoint, ColorTemperature,
    ColorXyy, Effect, HueSatPoint, Rgb,
};
