//! Two-segment throttle curve.
//!
//! The input range is split at half throttle. The lower half maps onto
//! `[0, mid]`, the upper half onto `[mid, 1]`, and each half blends a linear
//! and a cubic response by `expo`.

use fpv_rates_profile::ThrottleParams;

#[inline]
fn blend(x: f32, expo: f32) -> f32 {
    x * (1.0 - expo) + x * x * x * expo
}

/// Throttle output for `input` in `[0, 1]`.
///
/// `mid` and `expo` are fractions. The curve passes through `(0, 0)`,
/// `(0.5, mid)` and `(1, 1)`. With `mid` at 0 or 1 one half collapses to a
/// flat segment; the result stays finite.
pub fn compute_throttle(input: f32, mid: f32, expo: f32) -> f32 {
    if input < 0.5 {
        let x = input * 2.0;
        mid * blend(x, expo)
    } else {
        let x = (input - 0.5) * 2.0;
        mid + (1.0 - mid) * blend(x, expo)
    }
}

/// [`compute_throttle`] using stored percentages.
#[inline]
pub fn throttle_output(params: &ThrottleParams, input: f32) -> f32 {
    compute_throttle(input, params.mid_fraction(), params.expo_fraction())
}
