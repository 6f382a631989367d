//! Evenly spaced curve sampling for plotting.
//!
//! Sampling is a stateless function of the parameters and the sample count.
//! Callers that draw the curves only need the point list and the largest
//! absolute output to pick a vertical scale.

use serde::Serialize;

use fpv_rates_profile::{AxisRateParams, ThrottleParams};

use crate::error::CurveError;
use crate::rate::axis_rate;
use crate::throttle::throttle_output;

/// Number of intervals used when the caller has no preference.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Upper bound on the number of intervals accepted by the samplers.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Smallest vertical extent, in degrees/second, used for a rate plot.
pub const MIN_RATE_DISPLAY_SCALE: f32 = 1000.0;

/// Headroom above the highest sampled rate.
pub const RATE_DISPLAY_HEADROOM: f32 = 1.1;

/// One `(input, output)` pair on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub input: f32,
    pub output: f32,
}

/// Ordered samples of a curve plus the largest `|output|` seen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSamples {
    points: Vec<CurvePoint>,
    max_abs_output: f32,
}

impl CurveSamples {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn max_abs_output(&self) -> f32 {
        self.max_abs_output
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Vertical extent for a rate plot of this curve.
    pub fn display_scale(&self) -> f32 {
        rate_display_scale(self.max_abs_output)
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }
}

/// Vertical extent for a rate plot: at least [`MIN_RATE_DISPLAY_SCALE`],
/// otherwise the peak rate plus 10%.
pub fn rate_display_scale(max_abs_rate: f32) -> f32 {
    (max_abs_rate * RATE_DISPLAY_HEADROOM).max(MIN_RATE_DISPLAY_SCALE)
}

/// Shared vertical extent when several axes are drawn on one plot.
pub fn combined_rate_display_scale(curves: &[CurveSamples]) -> f32 {
    curves
        .iter()
        .map(CurveSamples::display_scale)
        .fold(MIN_RATE_DISPLAY_SCALE, f32::max)
}

fn check_sample_count(count: usize) -> Result<(), CurveError> {
    if count == 0 || count > MAX_SAMPLE_COUNT {
        return Err(CurveError::InvalidSampleCount {
            count,
            max: MAX_SAMPLE_COUNT,
        });
    }
    Ok(())
}

/// Evaluate `f` at `count + 1` evenly spaced inputs from `start` to `end`
/// inclusive.
///
/// # Errors
///
/// Returns [`CurveError::InvalidSampleCount`] if `count` is zero or above
/// [`MAX_SAMPLE_COUNT`].
pub fn sample_fn<F>(start: f32, end: f32, count: usize, f: F) -> Result<CurveSamples, CurveError>
where
    F: Fn(f32) -> f32,
{
    check_sample_count(count)?;

    let span = end - start;
    let mut points = Vec::with_capacity(count + 1);
    let mut max_abs_output = 0.0f32;

    for i in 0..=count {
        let input = start + span * i as f32 / count as f32;
        let output = f(input);
        max_abs_output = max_abs_output.max(output.abs());
        points.push(CurvePoint { input, output });
    }

    Ok(CurveSamples {
        points,
        max_abs_output,
    })
}

/// Sample an axis rate curve over stick deflections `-1..=1`.
///
/// # Errors
///
/// Returns [`CurveError::InvalidSampleCount`] for an unusable `count`.
pub fn sample_axis_curve(
    params: &AxisRateParams,
    count: usize,
) -> Result<CurveSamples, CurveError> {
    sample_fn(-1.0, 1.0, count, |stick| axis_rate(params, stick))
}

/// Sample the throttle curve over inputs `0..=1`.
///
/// # Errors
///
/// Returns [`CurveError::InvalidSampleCount`] for an unusable `count`.
pub fn sample_throttle_curve(
    params: &ThrottleParams,
    count: usize,
) -> Result<CurveSamples, CurveError> {
    sample_fn(0.0, 1.0, count, |input| throttle_output(params, input))
}
