//! # Wide Arithmetic Kernels
//!
//! Unsigned 256-bit helpers behind the 64.64 multiply, divide and square
//! root. Operands are magnitudes; signs are handled by the caller.

use alloy_primitives::U256;

use crate::error::{FixedError, FixedResult};

/// `2^128 - 1`.
const LOW_128: U256 = U256::from_limbs([u64::MAX, u64::MAX, 0, 0]);

/// Largest numerator divided without narrowing (`2^192 - 1`).
const DIRECT_LIMIT: U256 = U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0]);

const WIDE_ONE: U256 = U256::from_limbs([1, 0, 0, 0]);

/// Newton-Raphson refinements applied by [`sqrtu`].
const NEWTON_ITERATIONS: usize = 7;

/// Zero-extends a `u128` into 256 bits.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn widen(value: u128) -> U256 {
    U256::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
}

/// Narrows back to `u128`, failing if any high bit is set.
#[inline]
pub(crate) fn narrow(value: U256) -> FixedResult<u128> {
    let limbs = value.as_limbs();
    if limbs[2] != 0 || limbs[3] != 0 {
        return Err(FixedError::Overflow);
    }
    Ok(u128::from(limbs[0]) | (u128::from(limbs[1]) << 64))
}

/// `(a * b) >> 64` on magnitudes, exact over the full 256-bit product.
#[inline]
pub(crate) fn mul_shift(a: u128, b: u128) -> U256 {
    (widen(a) * widen(b)) >> 64_usize
}

/// Unsigned 64.64 quotient of two magnitudes: `floor((x << 64) / y)`.
///
/// Numerators up to 192 bits are divided directly. Wider numerators go
/// through a narrowing pass: the numerator is normalized against its most
/// significant bit, an approximate quotient is taken against a shortened
/// divisor, and the remainder decides a final correction of at most one.
///
/// # Errors
///
/// - [`FixedError::DivisionByZero`] if `y` is zero.
/// - [`FixedError::Overflow`] if the quotient does not fit in 128 bits.
pub fn divuu(x: U256, y: U256) -> FixedResult<u128> {
    if y.is_zero() {
        return Err(FixedError::DivisionByZero);
    }

    let quotient = if x <= DIRECT_LIMIT {
        (x << 64_usize) / y
    } else {
        narrowed_quotient(x, y)?
    };

    narrow(quotient)
}

fn narrowed_quotient(x: U256, y: U256) -> FixedResult<U256> {
    // x > 2^192 - 1, so msb >= 192.
    let msb = x.bit_len() - 1;

    let mut result = (x << (255 - msb)) / (((y - WIDE_ONE) >> (msb - 191)) + WIDE_ONE);
    if result > LOW_128 {
        return Err(FixedError::Overflow);
    }

    let hi = result * (y >> 128_usize);
    let lo = result * (y & LOW_128);

    let mut xh = x >> 192_usize;
    let mut xl = x.wrapping_shl(64_usize);

    // Subtract result * y from x << 64 across the (xh, xl) pair; both
    // subtractions are modular on the low word.
    if xl < lo {
        xh = xh.wrapping_sub(WIDE_ONE);
    }
    xl = xl.wrapping_sub(lo);
    let lo = hi.wrapping_shl(128_usize);
    if xl < lo {
        xh = xh.wrapping_sub(WIDE_ONE);
    }
    xl = xl.wrapping_sub(lo);

    result += if xh == hi >> 128_usize { xl / y } else { WIDE_ONE };
    Ok(result)
}

/// Integer square root rounded down.
///
/// Starts from `2^(floor(log2 x) / 2)`, refines with exactly seven Newton
/// steps, then returns the smaller of the estimate and `x / estimate`.
#[must_use]
pub(crate) fn sqrtu(x: U256) -> U256 {
    if x.is_zero() {
        return U256::ZERO;
    }

    let mut r = WIDE_ONE << ((x.bit_len() - 1) / 2);
    for _ in 0..NEWTON_ITERATIONS {
        r = (r + x / r) >> 1_usize;
    }

    r.min(x / r)
}
