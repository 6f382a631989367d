//! Rate profile type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// Default center sensitivity for every axis, in raw firmware units.
pub const DEFAULT_CENTER: i32 = 70;
/// Default full-deflection rate for every axis, in degrees/second.
pub const DEFAULT_MAX_RATE: i32 = 670;
/// Default throttle mid, in percent.
pub const DEFAULT_THROTTLE_MID: i32 = 50;

/// A rotation axis controlled by a stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Roll,
    Pitch,
    Yaw,
}

impl Axis {
    /// All axes in the order they appear in a configuration dump.
    pub const ALL: [Axis; 3] = [Axis::Roll, Axis::Pitch, Axis::Yaw];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Roll => "roll",
            Axis::Pitch => "pitch",
            Axis::Yaw => "yaw",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roll" => Ok(Axis::Roll),
            "pitch" => Ok(Axis::Pitch),
            "yaw" => Ok(Axis::Yaw),
            _ => Err(ProfileError::UnknownAxis(s.to_string())),
        }
    }
}

/// Tunable field of a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisField {
    Center,
    MaxRate,
    Expo,
}

impl AxisField {
    pub fn name(self) -> &'static str {
        match self {
            AxisField::Center => "center",
            AxisField::MaxRate => "max_rate",
            AxisField::Expo => "expo",
        }
    }
}

impl fmt::Display for AxisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" => Ok(AxisField::Center),
            "max_rate" | "max" => Ok(AxisField::MaxRate),
            "expo" => Ok(AxisField::Expo),
            _ => Err(ProfileError::UnknownAxisField(s.to_string())),
        }
    }
}

/// Tunable field of the throttle curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrottleField {
    Mid,
    Expo,
}

impl ThrottleField {
    pub fn name(self) -> &'static str {
        match self {
            ThrottleField::Mid => "mid",
            ThrottleField::Expo => "expo",
        }
    }
}

impl fmt::Display for ThrottleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThrottleField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mid" => Ok(ThrottleField::Mid),
            "expo" => Ok(ThrottleField::Expo),
            _ => Err(ProfileError::UnknownThrottleField(s.to_string())),
        }
    }
}

/// Rate parameters for one axis.
///
/// Values are kept exactly as the firmware stores them. No range is
/// enforced: the firmware is the authority on what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRateParams {
    /// Center sensitivity in raw units (x10 gives degrees/second).
    pub center: i32,
    /// Rate at full stick deflection, in degrees/second.
    pub max_rate: i32,
    /// Linear to cubic blend, in percent.
    pub expo: i32,
}

impl AxisRateParams {
    pub fn new(center: i32, max_rate: i32, expo: i32) -> Self {
        Self {
            center,
            max_rate,
            expo,
        }
    }

    pub fn get(&self, field: AxisField) -> i32 {
        match field {
            AxisField::Center => self.center,
            AxisField::MaxRate => self.max_rate,
            AxisField::Expo => self.expo,
        }
    }

    pub fn set(&mut self, field: AxisField, value: i32) {
        match field {
            AxisField::Center => self.center = value,
            AxisField::MaxRate => self.max_rate = value,
            AxisField::Expo => self.expo = value,
        }
    }
}

impl Default for AxisRateParams {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            max_rate: DEFAULT_MAX_RATE,
            expo: 0,
        }
    }
}

/// Throttle curve parameters, both in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleParams {
    pub mid: i32,
    pub expo: i32,
}

impl ThrottleParams {
    pub fn new(mid: i32, expo: i32) -> Self {
        Self { mid, expo }
    }

    /// Output at half throttle as a fraction. Not clamped.
    pub fn mid_fraction(&self) -> f32 {
        self.mid as f32 / 100.0
    }

    /// Expo as a fraction. Not clamped.
    pub fn expo_fraction(&self) -> f32 {
        self.expo as f32 / 100.0
    }

    /// Mid fraction with two decimals, e.g. `0.50`.
    pub fn mid_display(&self) -> String {
        format!("{:.2}", self.mid_fraction())
    }

    pub fn get(&self, field: ThrottleField) -> i32 {
        match field {
            ThrottleField::Mid => self.mid,
            ThrottleField::Expo => self.expo,
        }
    }

    pub fn set(&mut self, field: ThrottleField, value: i32) {
        match field {
            ThrottleField::Mid => self.mid = value,
            ThrottleField::Expo => self.expo = value,
        }
    }
}

impl Default for ThrottleParams {
    fn default() -> Self {
        Self {
            mid: DEFAULT_THROTTLE_MID,
            expo: 0,
        }
    }
}

/// Per-axis rate parameters.
///
/// One named field per axis, so no axis can ever be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisRates {
    pub roll: AxisRateParams,
    pub pitch: AxisRateParams,
    pub yaw: AxisRateParams,
}

impl AxisRates {
    pub fn get(&self, axis: Axis) -> &AxisRateParams {
        match axis {
            Axis::Roll => &self.roll,
            Axis::Pitch => &self.pitch,
            Axis::Yaw => &self.yaw,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut AxisRateParams {
        match axis {
            Axis::Roll => &mut self.roll,
            Axis::Pitch => &mut self.pitch,
            Axis::Yaw => &mut self.yaw,
        }
    }

    /// Iterate `(axis, params)` in dump order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &AxisRateParams)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

/// The complete tuning state: rates for every axis plus the throttle curve.
///
/// `RateProfile` is `Copy`; a snapshot handed to the curve math is just a
/// copy of the canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateProfile {
    pub rates: AxisRates,
    pub throttle: ThrottleParams,
}

impl RateProfile {
    pub fn axis(&self, axis: Axis) -> &AxisRateParams {
        self.rates.get(axis)
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisRateParams {
        self.rates.get_mut(axis)
    }

    pub fn set_axis_param(&mut self, axis: Axis, field: AxisField, value: i32) {
        self.rates.get_mut(axis).set(field, value);
    }

    pub fn set_throttle_param(&mut self, field: ThrottleField, value: i32) {
        self.throttle.set(field, value);
    }

    pub fn with_axis(mut self, axis: Axis, params: AxisRateParams) -> Self {
        *self.rates.get_mut(axis) = params;
        self
    }

    pub fn with_throttle(mut self, throttle: ThrottleParams) -> Self {
        self.throttle = throttle;
        self
    }
}
