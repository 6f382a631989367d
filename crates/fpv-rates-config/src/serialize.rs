//! Dump generation.

use fpv_rates_profile::{Axis, AxisField, RateProfile, ThrottleField};

use crate::keys::{RATES_TYPE_ACTUAL, RATES_TYPE_KEY, SettingTarget};

const HEADER: [&str; 2] = [
    "# Betaflight Rate Profile Configuration",
    "# Generated by FPV Rate Profile Playground",
];

const AXIS_FIELDS: [AxisField; 3] = [AxisField::Center, AxisField::MaxRate, AxisField::Expo];

fn section_title(axis: Axis) -> &'static str {
    match axis {
        Axis::Roll => "# Roll Rates",
        Axis::Pitch => "# Pitch Rates",
        Axis::Yaw => "# Yaw Rates",
    }
}

fn set_line(key: &str, value: impl std::fmt::Display) -> String {
    format!("set {key} = {value}")
}

/// Render `profile` as a dump that can be pasted into the firmware CLI.
///
/// The layout is fixed: header comments, `rates_type = ACTUAL`, the three
/// axes in roll, pitch, yaw order, the throttle, then `save`. Lines are
/// joined with `\n` and there is no trailing newline.
pub fn serialize(profile: &RateProfile) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|line| (*line).to_string()).collect();

    lines.push(String::new());
    lines.push("# Rate Type".to_string());
    lines.push(set_line(RATES_TYPE_KEY, RATES_TYPE_ACTUAL));

    for axis in Axis::ALL {
        lines.push(String::new());
        lines.push(section_title(axis).to_string());
        for field in AXIS_FIELDS {
            let target = SettingTarget::Axis(axis, field);
            lines.push(set_line(target.key(), target.read(profile)));
        }
    }

    lines.push(String::new());
    lines.push("# Throttle".to_string());
    for field in [ThrottleField::Mid, ThrottleField::Expo] {
        let target = SettingTarget::Throttle(field);
        lines.push(set_line(target.key(), target.read(profile)));
    }

    lines.push(String::new());
    lines.push("save".to_string());

    lines.join("\n")
}
