//! Command implementations for ratectl CLI

pub mod curve;
pub mod dump;
pub mod profile;

use std::str::FromStr;

use clap::{Subcommand, ValueEnum};
use fpv_rates_profile::{Axis, AxisField, ThrottleField};

/// Sample count used by `curve` when `--points` is not given.
pub const CLI_CURVE_POINTS: usize = 20;

#[derive(Subcommand)]
pub enum SetCommands {
    /// Set a per-axis parameter
    Axis {
        /// Axis to change (roll, pitch, yaw)
        #[arg(value_parser = Axis::from_str)]
        axis: Axis,
        /// Field to change (center, max_rate, expo)
        #[arg(value_parser = AxisField::from_str)]
        field: AxisField,
        /// New value
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Set a throttle parameter
    Throttle {
        /// Field to change (mid, expo)
        #[arg(value_parser = ThrottleField::from_str)]
        field: ThrottleField,
        /// New value in percent
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CurveTarget {
    Roll,
    Pitch,
    Yaw,
    Throttle,
}

impl CurveTarget {
    /// The stick axis, or `None` for the throttle curve.
    pub fn axis(self) -> Option<Axis> {
        match self {
            CurveTarget::Roll => Some(Axis::Roll),
            CurveTarget::Pitch => Some(Axis::Pitch),
            CurveTarget::Yaw => Some(Axis::Yaw),
            CurveTarget::Throttle => None,
        }
    }
}
