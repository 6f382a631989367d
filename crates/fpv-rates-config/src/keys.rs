//! The fixed set of dump keys understood by the codec.

use fpv_rates_profile::{Axis, AxisField, RateProfile, ThrottleField};

/// Key selecting the rate model on the firmware side.
pub const RATES_TYPE_KEY: &str = "rates_type";

/// The only rate model these curves describe.
pub const RATES_TYPE_ACTUAL: &str = "ACTUAL";

/// Profile field addressed by a recognised dump key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingTarget {
    Axis(Axis, AxisField),
    Throttle(ThrottleField),
}

/// Recognised keys, in the order they are applied and reported.
pub const RECOGNIZED_SETTINGS: [SettingTarget; 11] = [
    SettingTarget::Axis(Axis::Roll, AxisField::Center),
    SettingTarget::Axis(Axis::Pitch, AxisField::Center),
    SettingTarget::Axis(Axis::Yaw, AxisField::Center),
    SettingTarget::Axis(Axis::Roll, AxisField::MaxRate),
    SettingTarget::Axis(Axis::Pitch, AxisField::MaxRate),
    SettingTarget::Axis(Axis::Yaw, AxisField::MaxRate),
    SettingTarget::Axis(Axis::Roll, AxisField::Expo),
    SettingTarget::Axis(Axis::Pitch, AxisField::Expo),
    SettingTarget::Axis(Axis::Yaw, AxisField::Expo),
    SettingTarget::Throttle(ThrottleField::Mid),
    SettingTarget::Throttle(ThrottleField::Expo),
];

impl SettingTarget {
    /// Lower-case firmware key, e.g. `roll_rc_rate`.
    pub fn key(self) -> &'static str {
        match self {
            SettingTarget::Axis(Axis::Roll, AxisField::Center) => "roll_rc_rate",
            SettingTarget::Axis(Axis::Pitch, AxisField::Center) => "pitch_rc_rate",
            SettingTarget::Axis(Axis::Yaw, AxisField::Center) => "yaw_rc_rate",
            SettingTarget::Axis(Axis::Roll, AxisField::MaxRate) => "roll_rate",
            SettingTarget::Axis(Axis::Pitch, AxisField::MaxRate) => "pitch_rate",
            SettingTarget::Axis(Axis::Yaw, AxisField::MaxRate) => "yaw_rate",
            SettingTarget::Axis(Axis::Roll, AxisField::Expo) => "roll_expo",
            SettingTarget::Axis(Axis::Pitch, AxisField::Expo) => "pitch_expo",
            SettingTarget::Axis(Axis::Yaw, AxisField::Expo) => "yaw_expo",
            SettingTarget::Throttle(ThrottleField::Mid) => "thr_mid",
            SettingTarget::Throttle(ThrottleField::Expo) => "thr_expo",
        }
    }

    /// Human-readable name used in import status messages.
    pub fn label(self) -> &'static str {
        match self {
            SettingTarget::Axis(Axis::Roll, AxisField::Center) => "roll center",
            SettingTarget::Axis(Axis::Pitch, AxisField::Center) => "pitch center",
            SettingTarget::Axis(Axis::Yaw, AxisField::Center) => "yaw center",
            SettingTarget::Axis(Axis::Roll, AxisField::MaxRate) => "roll max rate",
            SettingTarget::Axis(Axis::Pitch, AxisField::MaxRate) => "pitch max rate",
            SettingTarget::Axis(Axis::Yaw, AxisField::MaxRate) => "yaw max rate",
            SettingTarget::Axis(Axis::Roll, AxisField::Expo) => "roll expo",
            SettingTarget::Axis(Axis::Pitch, AxisField::Expo) => "pitch expo",
            SettingTarget::Axis(Axis::Yaw, AxisField::Expo) => "yaw expo",
            SettingTarget::Throttle(ThrottleField::Mid) => "throttle mid",
            SettingTarget::Throttle(ThrottleField::Expo) => "throttle expo",
        }
    }

    /// Look up a recognised key, ignoring ASCII case.
    pub fn from_key(key: &str) -> Option<Self> {
        RECOGNIZED_SETTINGS
            .into_iter()
            .find(|target| target.key().eq_ignore_ascii_case(key))
    }

    pub fn read(self, profile: &RateProfile) -> i32 {
        match self {
            SettingTarget::Axis(axis, field) => profile.axis(axis).get(field),
            SettingTarget::Throttle(field) => profile.throttle.get(field),
        }
    }

    pub fn write(self, profile: &mut RateProfile, value: i32) {
        match self {
            SettingTarget::Axis(axis, field) => profile.set_axis_param(axis, field, value),
            SettingTarget::Throttle(field) => profile.set_throttle_param(field, value),
        }
    }
}
