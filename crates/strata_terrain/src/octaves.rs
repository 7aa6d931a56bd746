//! # Octave Compositor
//!
//! Sums simplex samples at decreasing amplitude and normalizes by the
//! total amplitude.

use strata_fixed::{Fixed, FixedResult, Vec3};

use crate::simplex::noise;

/// Multi-octave noise at `point`.
///
/// Octave `k` samples `noise(point / s)` with `s = persistence^k` and
/// weights it by `s`. The weighted sum is divided by the sum of weights.
///
/// # Errors
///
/// - `DivisionByZero` when `octaves == 0` (the weight sum is zero), or when
///   `persistence` underflows a scale to zero.
/// - Anything raised by [`noise`] or the accumulation.
pub fn noise_octaves(point: Vec3, octaves: u32, persistence: Fixed) -> FixedResult<Fixed> {
    let mut total = Fixed::ZERO;
    let mut amplitude_sum = Fixed::ZERO;
    let mut scale = Fixed::ONE;

    for _ in 0..octaves {
        let sample = noise(point.div_scalar(scale)?)?;
        total = total.safe_add(sample.safe_mul(scale)?)?;
        amplitude_sum = amplitude_sum.safe_add(scale)?;
        scale = scale.safe_mul(persistence)?;
    }

    total.safe_div(amplitude_sum)
}
