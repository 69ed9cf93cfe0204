//! Color values and bridge parameters.

mod brightness;
mod color;
mod effect;
mod gamut;
mod hsb;
mod mode;
mod point;
mod rgb;
mod temperature;
mod xyy;

pub use brightness::Brightness;
pub use color::Color;
pub use effect::{Alert, Effect};
pub use gamut::ColorGamut;
pub use hsb::ColorHsb;
pub use mode::ColorMode;
pub use point::{ChromaticityPoint, ColorPoint, HueSatPoint};
pub use rgb::Rgb;
pub use temperature::ColorTemperature;
pub use xyy::ColorXyy;
