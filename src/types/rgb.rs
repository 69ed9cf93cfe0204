//! Display RGB colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// An sRGB color with red, green and blue components in [0, 1].
///
/// RGB is only ever used for display; commands to the bridge go through the
/// hue/saturation, xy or color temperature fields instead.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub(crate) red: f64,
    pub(crate) green: f64,
    pub(crate) blue: f64,
}

impl Rgb {
    /// Create a color from components in [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Rgb;
    ///
    /// assert!(Rgb::new(1.0, 0.5, 0.0).is_ok());
    /// assert!(Rgb::new(1.2, 0.5, 0.0).is_err());
    /// ```
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self> {
        Ok(Self {
            red: Error::check_range("red", red, 0.0, 1.0)?,
            green: Error::check_range("green", green, 0.0, 1.0)?,
            blue: Error::check_range("blue", blue, 0.0, 1.0)?,
        })
    }

    /// Create a color from 8-bit components.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }

    /// Clamp each component into [0, 1]; NaN becomes 0.
    pub(crate) fn clamped(red: f64, green: f64, blue: f64) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            red: clamp(red),
            green: clamp(green),
            blue: clamp(blue),
        }
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// The 8-bit components, rounded.
    pub fn to_bytes(&self) -> [u8; 3] {
        let byte = |v: f64| (v * 255.0).round() as u8;
        [byte(self.red), byte(self.green), byte(self.blue)]
    }

    /// Render as `#rrggbb`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Rgb;
    ///
    /// assert_eq!(Rgb::from_bytes(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#rrggbb`, `#rgb` or a comma-separated byte triple such as `255,128,0`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColorString(s.to_string());
        let s = s.trim();

        if s.contains(',') {
            let parts = s
                .split(',')
                .map(|c| c.trim().parse::<u8>())
                .collect::<std::result::Result<Vec<u8>, _>>()
                .map_err(|_| invalid())?;
            return match parts[..] {
                [r, g, b] => Ok(Self::from_bytes(r, g, b)),
                _ => Err(invalid()),
            };
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let double = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self::from_bytes(double(0)?, double(1)?, double(2)?))
            }
            6 => Ok(Self::from_bytes(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
