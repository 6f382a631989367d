//! Stick-response curve math for FPV rate tuning
//!
//! This crate turns rate and throttle parameters into numeric curves.
//!
//! # Overview
//!
//! - **Axis rates**: stick deflection in `[-1, 1]` to degrees/second
//!   ([`compute_axis_rate`], [`axis_rate`])
//! - **Throttle**: throttle input in `[0, 1]` to output in `[0, 1]`
//!   ([`compute_throttle`], [`throttle_output`])
//! - **Sampling**: evenly spaced points for plotting
//!   ([`sample_axis_curve`], [`sample_throttle_curve`])
//!
//! Every function here is pure. The rate and throttle functions accept any
//! finite input without clamping and never fail.
//!
//! # Example
//!
//! ```
//! use fpv_rates_curves::{axis_rate, sample_axis_curve, DEFAULT_SAMPLE_COUNT};
//! use fpv_rates_profile::AxisRateParams;
//!
//! let roll = AxisRateParams::default();
//! assert_eq!(axis_rate(&roll, 0.0), 0.0);
//! assert!((axis_rate(&roll, 1.0) - 670.0).abs() < 1e-3);
//!
//! let samples = sample_axis_curve(&roll, DEFAULT_SAMPLE_COUNT)?;
//! assert_eq!(samples.len(), DEFAULT_SAMPLE_COUNT + 1);
//! # Ok::<(), fpv_rates_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod prelude;
pub mod rate;
pub mod sample;
pub mod throttle;

pub use error::CurveError;
pub use rate::{CENTER_SENSITIVITY_SCALE, axis_rate, compute_axis_rate, expo_blend};
pub use sample::{
    CurvePoint, CurveSamples, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT, MIN_RATE_DISPLAY_SCALE,
    RATE_DISPLAY_HEADROOM, combined_rate_display_scale, rate_display_scale, sample_axis_curve,
    sample_fn, sample_throttle_curve,
};
pub use throttle::{compute_throttle, throttle_output};
