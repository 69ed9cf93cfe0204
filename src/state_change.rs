//! State change commands for Hue lights.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Alert, Brightness, ChromaticityPoint, ColorGamut, ColorHsb, ColorTemperature, ColorXyy, Effect};

type Result<T> = std::result::Result<T, Error>;

/// The body of a `PUT /lights/<id>/state` request.
///
/// A change can combine several attributes; the bridge applies them
/// together. Setting an absolute value drops a pending increment of the
/// same attribute and vice versa.
///
/// # Creating State Changes
///
/// 1. **From a single color or brightness** using the [`From`] trait:
///    ```
///    use hue_lights_rs::{ColorHsb, StateChange};
///    let change = StateChange::from(&ColorHsb::new(120.0, 1.0, 0.5).unwrap());
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use hue_lights_rs::{Brightness, Effect, StateChange};
///    let mut change = StateChange::new();
///    change.power(true);
///    change.brightness(&Brightness::create(200).unwrap());
///    change.effect(Effect::ColorLoop);
///    assert_eq!(
///        change.to_json().unwrap(),
///        r#"{"on":true,"bri":200,"effect":"colorloop"}"#
///    );
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StateChange {
    pub(crate) on: Option<bool>,
    pub(crate) bri: Option<u8>,
    pub(crate) bri_inc: Option<i16>,
    pub(crate) hue: Option<u16>,
    pub(crate) hue_inc: Option<i32>,
    pub(crate) sat: Option<u8>,
    pub(crate) sat_inc: Option<i16>,
    pub(crate) xy: Option<[f64; 2]>,
    pub(crate) xy_inc: Option<[f64; 2]>,
    pub(crate) ct: Option<u16>,
    pub(crate) ct_inc: Option<i32>,
    pub(crate) alert: Option<Alert>,
    pub(crate) effect: Option<Effect>,
    pub(crate) transitiontime: Option<u16>,
}

impl StateChange {
    /// Create a new empty state change.
    ///
    /// At least one attribute must be set before it can be sent.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::StateChange;
    ///
    /// let change = StateChange::new();
    /// assert_eq!(change.is_valid(), false);
    /// assert!(change.to_json().is_err());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this change sets at least one attribute.
    pub fn is_valid(&self) -> bool {
        self.on.is_some()
            || self.bri.is_some()
            || self.bri_inc.is_some()
            || self.hue.is_some()
            || self.hue_inc.is_some()
            || self.sat.is_some()
            || self.sat_inc.is_some()
            || self.xy.is_some()
            || self.xy_inc.is_some()
            || self.ct.is_some()
            || self.ct_inc.is_some()
            || self.alert.is_some()
            || self.effect.is_some()
            || self.transitiontime.is_some()
    }

    /// Serialize as the request body, leaving out unset attributes.
    pub fn to_json(&self) -> Result<String> {
        if !self.is_valid() {
            return Err(Error::NoAttribute);
        }
        serde_json::to_string(self).map_err(Error::JsonDump)
    }

    pub fn power(&mut self, on: bool) {
        self.on = Some(on);
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.bri = Some(brightness.value());
        self.bri_inc = None;
    }

    pub fn inc_brightness(&mut self, delta: i16) -> Result<()> {
        check_delta("brightness increment", delta.into(), 254)?;
        self.bri_inc = Some(delta);
        self.bri = None;
        Ok(())
    }

    /// Set the raw bridge hue, 0 to 65535.
    pub fn hue(&mut self, hue: u16) {
        self.hue = Some(hue);
        self.hue_inc = None;
    }

    pub fn inc_hue(&mut self, delta: i32) -> Result<()> {
        check_delta("hue increment", delta, 65534)?;
        self.hue_inc = Some(delta);
        self.hue = None;
        Ok(())
    }

    /// Set the raw bridge saturation, 0 to 254.
    pub fn saturation(&mut self, sat: u8) -> Result<()> {
        Error::check_range("saturation", f64::from(sat), 0.0, 254.0)?;
        self.sat = Some(sat);
        self.sat_inc = None;
        Ok(())
    }

    pub fn inc_saturation(&mut self, delta: i16) -> Result<()> {
        check_delta("saturation increment", delta.into(), 254)?;
        self.sat_inc = Some(delta);
        self.sat = None;
        Ok(())
    }

    /// Set the chromaticity. Coordinates are rounded to 4 decimal places.
    pub fn xy(&mut self, point: &ChromaticityPoint) -> Result<()> {
        let x = Error::check_range("x", point.x(), 0.0, 1.0)?;
        let y = Error::check_range("y", point.y(), 0.0, 1.0)?;
        self.xy = Some([round4(x), round4(y)]);
        self.xy_inc = None;
        Ok(())
    }

    /// Move the chromaticity by up to 0.5 along each axis.
    pub fn inc_xy(&mut self, dx: f64, dy: f64) -> Result<()> {
        let dx = Error::check_range("x increment", dx, -0.5, 0.5)?;
        let dy = Error::check_range("y increment", dy, -0.5, 0.5)?;
        self.xy_inc = Some([round4(dx), round4(dy)]);
        self.xy = None;
        Ok(())
    }

    /// Set the color temperature; lights accept 153 to 500 mireds.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ColorTemperature, StateChange};
    ///
    /// let mut change = StateChange::new();
    /// assert!(change.color_temperature(&ColorTemperature::from_mired(370).unwrap()).is_ok());
    /// assert!(change.color_temperature(&ColorTemperature::from_mired(600).unwrap()).is_err());
    /// ```
    pub fn color_temperature(&mut self, temperature: &ColorTemperature) -> Result<()> {
        if !temperature.is_device_range() {
            return Err(Error::out_of_range(
                "mired",
                f64::from(temperature.mired()),
                f64::from(ColorTemperature::DEVICE_MIN_MIRED),
                f64::from(ColorTemperature::DEVICE_MAX_MIRED),
            ));
        }
        self.ct = Some(temperature.mired());
        self.ct_inc = None;
        Ok(())
    }

    /// Set the color temperature in Kelvin, rounded to the nearest mired.
    pub fn kelvin(&mut self, kelvin: f64) -> Result<()> {
        self.color_temperature(&ColorTemperature::from_kelvin(kelvin)?)
    }

    /// Move the color temperature by a number of mireds.
    pub fn inc_ct(&mut self, delta: i32) -> Result<()> {
        check_delta("mired increment", delta, 65534)?;
        self.ct_inc = Some(delta);
        self.ct = None;
        Ok(())
    }

    /// Set hue, saturation and brightness from one color.
    pub fn color_hsb(&mut self, color: &ColorHsb) {
        let (hue, sat, bri) = color.to_wire();
        self.hue(hue);
        self.sat = Some(sat);
        self.sat_inc = None;
        self.brightness(&bri);
    }

    /// Set chromaticity and brightness from one color, first moving it into
    /// `gamut` if one is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ColorGamut, ColorXyy, StateChange};
    ///
    /// let mut change = StateChange::new();
    /// let red = ColorXyy::new(0.75, 0.3, 1.0).unwrap();
    /// change.color_xyy(&red, Some(&ColorGamut::C)).unwrap();
    /// assert_eq!(change.to_json().unwrap(), r#"{"bri":254,"xy":[0.692,0.308]}"#);
    /// ```
    pub fn color_xyy(&mut self, color: &ColorXyy, gamut: Option<&ColorGamut>) -> Result<()> {
        let color = match gamut {
            Some(gamut) => color.clamp_to(gamut),
            None => *color,
        };
        self.xy(&color.point())?;
        self.brightness(&Brightness::saturating(color.luminance));
        Ok(())
    }

    pub fn alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn effect(&mut self, effect: Effect) {
        self.effect = Some(effect);
    }

    /// Set the transition time, sent in steps of 100 ms.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use hue_lights_rs::StateChange;
    ///
    /// let mut change = StateChange::new();
    /// change.transition_time(Duration::from_millis(400)).unwrap();
    /// assert_eq!(change.to_json().unwrap(), r#"{"transitiontime":4}"#);
    /// ```
    pub fn transition_time(&mut self, duration: Duration) -> Result<()> {
        let steps = (duration.as_secs_f64() * 10.0).round();
        let steps = Error::check_range("transition time", steps, 0.0, f64::from(u16::MAX))?;
        self.transitiontime = Some(steps as u16);
        Ok(())
    }
}

fn check_delta(what: &'static str, delta: i32, limit: i32) -> Result<()> {
    Error::check_range(what, f64::from(delta), f64::from(-limit), f64::from(limit)).map(|_| ())
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl From<&ColorHsb> for StateChange {
    fn from(color: &ColorHsb) -> Self {
        let mut change = StateChange::new();
        change.color_hsb(color);
        change
    }
}

impl From<&ColorXyy> for StateChange {
    fn from(color: &ColorXyy) -> Self {
        let mut change = StateChange::new();
        change.xy = Some([round4(color.x()), round4(color.y())]);
        change.brightness(&Brightness::saturating(color.luminance));
        change
    }
}

impl From<&Brightness> for StateChange {
    fn from(brightness: &Brightness) -> Self {
        let mut change = StateChange::new();
        change.brightness(brightness);
        change
    }
}
