//! Actual-rates stick response.
//!
//! Maps a normalized stick deflection to a rotation rate in degrees/second:
//!
//! ```text
//! a    = |stick|
//! e    = (expo/100)·a³ + a·(1 − expo/100)      (e = a when expo <= 0)
//! s    = center · 10
//! rate = a·s + e·a·(max_rate − s)
//! ```
//!
//! The expo blend is weighted by the stick magnitude a second time (`e·a`),
//! so with `expo = 0` the curve is `a·s + a²·(max_rate − s)`. At full
//! deflection the rate equals `max_rate` for any expo.
//!
//! A second formula circulates for the same firmware mode,
//! `a·s + e·(max_rate − s)`, which drops the extra `a`. Both are zero at
//! center and odd-symmetric; they differ in how fast the curve leaves the
//! center slope. Only the double-weighted form is implemented here.

use fpv_rates_profile::AxisRateParams;

/// Factor converting the raw center unit to degrees/second.
pub const CENTER_SENSITIVITY_SCALE: f32 = 10.0;

/// Blend between a linear and a cubic response, `expo` in percent.
///
/// Non-positive expo yields the linear response. Values above 100 are not
/// clamped.
#[inline]
pub fn expo_blend(magnitude: f32, expo: f32) -> f32 {
    expo_blend_wide(f64::from(magnitude), f64::from(expo)) as f32
}

#[inline]
fn expo_blend_wide(magnitude: f64, expo: f64) -> f64 {
    if expo > 0.0 {
        let k = expo / 100.0;
        k * magnitude * magnitude * magnitude + magnitude * (1.0 - k)
    } else {
        magnitude
    }
}

/// Rotation rate in degrees/second for a stick deflection in `[-1, 1]`.
///
/// The sign follows `stick`, and a centered stick returns exactly `0.0`.
/// Inputs are not clamped. The curve is evaluated in `f64`, so finite inputs
/// never give NaN; a rate beyond the `f32` range saturates to an infinity
/// of the stick's sign.
pub fn compute_axis_rate(stick: f32, center: f32, max_rate: f32, expo: f32) -> f32 {
    let magnitude = f64::from(stick.abs());
    if magnitude == 0.0 {
        return 0.0;
    }

    let blended = expo_blend_wide(magnitude, f64::from(expo));
    let sensitivity = f64::from(center) * f64::from(CENTER_SENSITIVITY_SCALE);
    let rate = magnitude * sensitivity + blended * magnitude * (f64::from(max_rate) - sensitivity);

    let rate = rate as f32;
    if stick < 0.0 { -rate } else { rate }
}

/// [`compute_axis_rate`] using an axis's stored parameters.
#[inline]
pub fn axis_rate(params: &AxisRateParams, stick: f32) -> f32 {
    compute_axis_rate(
        stick,
        params.center as f32,
        params.max_rate as f32,
        params.expo as f32,
    )
}
