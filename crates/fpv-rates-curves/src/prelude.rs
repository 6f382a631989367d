//! Prelude for the curves crate.
//!
//! This module re-exports the most commonly used functions and types.
//!
//! # Example
//!
//! ```
//! use fpv_rates_curves::prelude::*;
//!
//! let output = compute_throttle(0.5, 0.4, 0.0);
//! assert!((output - 0.4).abs() < 1e-6);
//! ```

pub use crate::error::CurveError;
pub use crate::rate::{axis_rate, compute_axis_rate};
pub use crate::sample::{
    CurvePoint, CurveSamples, DEFAULT_SAMPLE_COUNT, sample_axis_curve, sample_throttle_curve,
};
pub use crate::throttle::{compute_throttle, throttle_output};
