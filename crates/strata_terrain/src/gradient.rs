//! # Permutation & Gradient Primitives
//!
//! The hash and normalization building blocks of the simplex evaluator,
//! together with every constant it needs.
//!
//! ## Constant Encoding
//!
//! Each constant is the exact raw integer the ledger library holds. The
//! rational ones equal `Fixed::from_ratio(n, d)` (magnitude truncated, sign
//! applied afterward); the Taylor coefficients are the truncation of their
//! 14-digit decimal literals. Nothing is derived at runtime.

use strata_fixed::{Fixed, FixedResult, Vec4};

/// Simplex unskew factor `1/6`.
pub const SKEW_C_X: Fixed = Fixed::from_raw(3_074_457_345_618_258_602);

/// Simplex skew factor `1/3`.
pub const SKEW_C_Y: Fixed = Fixed::from_raw(6_148_914_691_236_517_205);

/// Gradient grid spacing `2/7`.
pub const GRAD_NS_X: Fixed = Fixed::from_raw(5_270_498_306_774_157_604);

/// Gradient grid offset `-13/14`.
pub const GRAD_NS_Y: Fixed = Fixed::from_raw(-17_129_119_497_016_012_214);

/// Gradient grid scale `1/7`.
pub const GRAD_NS_Z: Fixed = Fixed::from_raw(2_635_249_153_387_078_802);

/// `1.79284291400159`
pub const TAYLOR_A: Fixed = Fixed::from_raw(33_072_114_398_950_993_631);

/// `0.85373472095314`
pub const TAYLOR_B: Fixed = Fixed::from_raw(15_748_625_904_262_413_056);

/// Permutation multiplier.
pub const PERMUTE_MUL: Fixed = Fixed::from_int(34);

/// Hash domain; cell coordinates wrap modulo this.
pub const PERMUTE_MOD: Fixed = Fixed::from_int(289);

/// Gradient grid cell count (`7 * 7`).
pub const GRID_CELLS: Fixed = Fixed::from_int(49);

/// Gradient grid row width.
pub const GRID_ROW: Fixed = Fixed::from_int(7);

/// Final 3D normalization factor.
pub const NORMALIZATION: Fixed = Fixed::from_int(105);

/// `((x * 34 + 1) * x) mod 289` per component.
///
/// # Errors
///
/// Propagates any overflow from the component arithmetic.
#[inline]
pub fn permute(x: Vec4) -> FixedResult<Vec4> {
    x.mul_scalar(PERMUTE_MUL)?
        .add_scalar(Fixed::ONE)?
        .safe_mul(x)?
        .rem_scalar(PERMUTE_MOD)
}

/// First-order Taylor approximation of `1 / sqrt(r)` per component.
///
/// # Errors
///
/// Propagates any overflow from the component arithmetic.
#[inline]
pub fn taylor_inv_sqrt(r: Vec4) -> FixedResult<Vec4> {
    Vec4::splat(TAYLOR_A).safe_sub(r.mul_scalar(TAYLOR_B)?)
}

/// `ONE` if `x >= edge`, else `ZERO`.
#[inline]
#[must_use]
pub fn step(edge: Fixed, x: Fixed) -> Fixed {
    if x >= edge {
        Fixed::ONE
    } else {
        Fixed::ZERO
    }
}

/// Smaller of two values.
#[inline]
#[must_use]
pub fn min(a: Fixed, b: Fixed) -> Fixed {
    a.min(b)
}

/// Larger of two values.
#[inline]
#[must_use]
pub fn max(a: Fixed, b: Fixed) -> Fixed {
    a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_constants_match_from_ratio() {
        let cases = [
            (SKEW_C_X, 1, 6),
            (SKEW_C_Y, 1, 3),
            (GRAD_NS_X, 2, 7),
            (GRAD_NS_Y, -13, 14),
            (GRAD_NS_Z, 1, 7),
        ];
        for (constant, num, den) in cases {
            assert_eq!(Fixed::from_ratio(num, den), Ok(constant), "{num}/{den}");
        }
    }

    #[test]
    fn test_taylor_constants_truncate_decimal_literals() {
        let one = Fixed::ONE.raw();
        let scale = 100_000_000_000_000_i128;
        assert_eq!(TAYLOR_A.raw(), (179_284_291_400_159_i128 * one) / scale);
        assert_eq!(TAYLOR_B.raw(), (85_373_472_095_314_i128 * one) / scale);
    }

    #[test]
    fn test_permute_hashes_small_integers() {
        let input = Vec4::new(
            Fixed::from_int(5),
            Fixed::ZERO,
            Fixed::ONE,
            Fixed::from_int(288),
        );
        let expected = Vec4::new(
            Fixed::from_int(277),
            Fixed::ZERO,
            Fixed::from_int(35),
            Fixed::from_int(33),
        );
        assert_eq!(permute(input), Ok(expected));
    }

    #[test]
    fn test_taylor_inv_sqrt() {
        let r = Vec4::new(Fixed::ZERO, Fixed::ONE, Fixed::HALF, Fixed::from_int(2));
        let out = taylor_inv_sqrt(r).unwrap();
        assert_eq!(out.x, TAYLOR_A);
        assert_eq!(out.y.raw(), 17_323_488_494_688_580_575);
        assert_eq!(out.z.raw(), 25_197_801_446_819_787_103);
        assert_eq!(out.w.raw(), 1_574_862_590_426_167_519);
    }

    #[test]
    fn test_step_is_inclusive() {
        let a = Fixed::from_int(3);
        assert_eq!(step(a, a), Fixed::ONE);
        assert_eq!(step(a, Fixed::from_int(4)), Fixed::ONE);
        assert_eq!(step(a, Fixed::from_int(2)), Fixed::ZERO);
    }

    #[test]
    fn test_min_max() {
        let a = -Fixed::HALF;
        let b = Fixed::ONE;
        assert_eq!(min(a, b), a);
        assert_eq!(max(a, b), b);
    }
}
