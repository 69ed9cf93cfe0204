//! Brightness as the bridge encodes it.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::wire::{BRI_MAX, BRI_MIN};

type Result<T> = std::result::Result<T, Error>;

/// Brightness level from 1 to 254, the bridge's `bri` field.
///
/// Colors keep brightness normalized to [0, 1]; this type is the explicit
/// boundary between the two encodings.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: BRI_MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (1-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Brightness;
    ///
    /// assert!(Brightness::create(0).is_none());
    /// assert!(Brightness::create(1).is_some());
    /// assert!(Brightness::create(254).is_some());
    /// assert!(Brightness::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Map a normalized brightness onto the bridge scale.
    ///
    /// Zero maps to the dimmest level, 1, since the bridge has no zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Brightness;
    ///
    /// assert_eq!(Brightness::from_normalized(1.0).unwrap().value(), 254);
    /// assert_eq!(Brightness::from_normalized(0.5).unwrap().value(), 127);
    /// assert_eq!(Brightness::from_normalized(0.0).unwrap().value(), 1);
    /// assert!(Brightness::from_normalized(1.5).is_err());
    /// ```
    pub fn from_normalized(brightness: f64) -> Result<Self> {
        let brightness = Error::check_range("brightness", brightness, 0.0, 1.0)?;
        Ok(Self::saturating(brightness))
    }

    /// Like [`Brightness::from_normalized`], clamping instead of failing.
    pub(crate) fn saturating(brightness: f64) -> Self {
        let value = (brightness.clamp(0.0, 1.0) * f64::from(BRI_MAX)).round() as u8;
        Brightness {
            value: value.max(BRI_MIN),
        }
    }

    /// This brightness in [0, 1].
    pub fn normalized(&self) -> f64 {
        f64::from(self.value) / f64::from(BRI_MAX)
    }

    fn is_valid(value: u8) -> bool {
        (BRI_MIN..=BRI_MAX).contains(&value)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for Brightness {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::create(value).ok_or_else(|| {
            Error::out_of_range(
                "brightness",
                f64::from(value),
                f64::from(BRI_MIN),
                f64::from(BRI_MAX),
            )
        })
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> Self {
        brightness.value
    }
}
