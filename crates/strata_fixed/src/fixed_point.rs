//! # Fixed-Point Arithmetic
//!
//! **CRITICAL: NO FLOATING POINT IN TERRAIN CALCULATIONS**
//!
//! Signed 64.64 fixed-point numbers whose every bit must agree with the
//! ledger's own evaluation of the same formula.
//!
//! ## Representation
//!
//! A single `i128` interpreted as `raw / 2^64`:
//! 64 integer bits (including sign) and 64 fractional bits.
//!
//! ## Sign/Magnitude Rounding
//!
//! Multiply and divide split each operand into `(sign, magnitude)`, work on
//! magnitudes only, and reapply the combined sign at the end. Magnitudes are
//! truncated, so results round toward zero. A two's-complement
//! multiply-then-shift rounds toward negative infinity instead and disagrees
//! by one unit in the last place for some negative operands:
//!
//! ```text
//! raw(-3) * raw(0.5)   sign/magnitude: -(3 * 2^63 >> 64) = -1
//!                      two's complement: (-3 * 2^63) >> 64 = -2
//! ```
//!
//! The sign/magnitude result is the pinned behavior.

use std::fmt;
use std::ops::Neg;

use alloy_primitives::U256;

use crate::error::{FixedError, FixedResult};
use crate::wide::{self, divuu, widen};

/// Number of fractional bits.
const FRAC_BITS: u32 = 64;

/// Raw value of 1.0.
const ONE_RAW: i128 = 1 << FRAC_BITS;

/// Largest magnitude a negative result may carry (`2^127`).
const NEG_LIMIT: u128 = 1 << 127;

/// Signed 64.64 fixed-point number.
///
/// Immutable: every operation returns a new value. Ordering and equality
/// compare the raw integers, which matches numeric ordering.
///
/// # Range
///
/// - Minimum: `-2^63` (raw `-2^127`)
/// - Maximum: `2^63 - 2^-64` (raw `2^127 - 1`)
/// - Resolution: `2^-64`
///
/// # Example
///
/// ```rust
/// use strata_fixed::Fixed;
///
/// let third = Fixed::from_ratio(1, 3)?;
/// let one = third.safe_mul(Fixed::from_int(3))?;
/// assert_eq!(one.to_int(), 0); // 0.999..., truncated
/// # Ok::<(), strata_fixed::FixedError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed(i128);

impl Fixed {
    /// Zero value.
    pub const ZERO: Self = Self(0);

    /// One unit (raw `2^64`).
    pub const ONE: Self = Self(ONE_RAW);

    /// One half (raw `2^63`).
    pub const HALF: Self = Self(ONE_RAW >> 1);

    /// Minimum representable value.
    pub const MIN: Self = Self(i128::MIN);

    /// Maximum representable value.
    pub const MAX: Self = Self(i128::MAX);

    /// Creates from the raw scaled integer (no conversion).
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled integer.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Creates from a whole number.
    ///
    /// The argument type already enforces the signed 64-bit bound, so this
    /// cannot fail. See [`Fixed::try_from_int`] for wider inputs.
    #[inline]
    #[must_use]
    pub const fn from_int(value: i64) -> Self {
        Self((value as i128) << FRAC_BITS)
    }

    /// Creates from a whole number given as `i128`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedError::OutOfRange`] if `value` is outside `i64`.
    #[inline]
    pub fn try_from_int(value: i128) -> FixedResult<Self> {
        i64::try_from(value)
            .map(Self::from_int)
            .map_err(|_| FixedError::OutOfRange)
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_int(self) -> i64 {
        // i128 >> 64 always lands in the i64 range.
        (self.0 >> FRAC_BITS) as i64
    }

    /// Exact rational constant `numerator / denominator`.
    ///
    /// Goes through [`Fixed::divi`], so the magnitude is truncated before
    /// the sign is applied.
    ///
    /// # Errors
    ///
    /// - [`FixedError::DivisionByZero`] if `denominator` is zero.
    /// - [`FixedError::Overflow`] if the ratio does not fit.
    #[inline]
    pub fn from_ratio(numerator: i64, denominator: i64) -> FixedResult<Self> {
        Self::from_int(numerator).divi(Self::from_int(denominator))
    }

    /// Returns true if strictly below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns true if zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Safe addition with error on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`FixedError::Overflow`] if the sum leaves `[MIN, MAX]`.
    #[inline]
    pub fn safe_add(self, rhs: Self) -> FixedResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or(FixedError::Overflow)
    }

    /// Safe subtraction with error on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`FixedError::Overflow`] if the difference leaves `[MIN, MAX]`.
    #[inline]
    pub fn safe_sub(self, rhs: Self) -> FixedResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or(FixedError::Overflow)
    }

    /// Sign/magnitude multiply.
    ///
    /// `|a| * |b| >> 64` on unsigned 256-bit intermediates, then the XOR of
    /// the operand signs is reapplied.
    ///
    /// # Errors
    ///
    /// Returns [`FixedError::Overflow`] if the signed product leaves `[MIN, MAX]`.
    #[inline]
    pub fn safe_mul(self, rhs: Self) -> FixedResult<Self> {
        let negative = self.is_negative() != rhs.is_negative();
        let magnitude = wide::mul_shift(self.0.unsigned_abs(), rhs.0.unsigned_abs());
        Self::with_sign(negative, wide::narrow(magnitude)?)
    }

    /// Sign/magnitude divide.
    ///
    /// The magnitude quotient comes from [`divuu`]; the combined sign is
    /// reapplied afterward.
    ///
    /// # Errors
    ///
    /// - [`FixedError::DivisionByZero`] if `rhs` is zero.
    /// - [`FixedError::Overflow`] if the quotient leaves `[MIN, MAX]`.
    #[inline]
    pub fn safe_div(self, rhs: Self) -> FixedResult<Self> {
        if rhs.is_zero() {
            return Err(FixedError::DivisionByZero);
        }
        let negative = self.is_negative() != rhs.is_negative();
        let magnitude = divuu(self.magnitude(), rhs.magnitude())?;
        Self::with_sign(negative, magnitude)
    }

    /// Integer-aware division used to encode rational constants.
    ///
    /// Both operands are normalized to magnitudes and divided with
    /// [`divuu`]. A negative result is re-negated only if its magnitude is
    /// within `[0, 2^127]`; a positive one must not exceed `MAX`.
    ///
    /// # Errors
    ///
    /// - [`FixedError::DivisionByZero`] if `rhs` is zero.
    /// - [`FixedError::Overflow`] if the quotient is outside those bounds.
    pub fn divi(self, rhs: Self) -> FixedResult<Self> {
        if rhs.is_zero() {
            return Err(FixedError::DivisionByZero);
        }

        let mut negative = false;
        if self.is_negative() {
            negative = true;
        }
        if rhs.is_negative() {
            negative = !negative;
        }

        let absolute = divuu(self.magnitude(), rhs.magnitude())?;
        if negative {
            if absolute > NEG_LIMIT {
                return Err(FixedError::Overflow);
            }
            Ok(Self(0_i128.wrapping_sub_unsigned(absolute)))
        } else {
            i128::try_from(absolute)
                .map(Self)
                .map_err(|_| FixedError::Overflow)
        }
    }

    /// Signed remainder of the raw values (sign follows the dividend).
    ///
    /// # Errors
    ///
    /// - [`FixedError::DivisionByZero`] if `rhs` is zero.
    /// - [`FixedError::Overflow`] for `MIN % -2^-64`.
    #[inline]
    pub fn safe_rem(self, rhs: Self) -> FixedResult<Self> {
        if rhs.is_zero() {
            return Err(FixedError::DivisionByZero);
        }
        self.0.checked_rem(rhs.0).map(Self).ok_or(FixedError::Overflow)
    }

    /// Alias of [`Fixed::safe_rem`]. No floor-modulo correction is applied.
    ///
    /// # Errors
    ///
    /// Same as [`Fixed::safe_rem`].
    #[inline]
    pub fn safe_mod(self, rhs: Self) -> FixedResult<Self> {
        self.safe_rem(rhs)
    }

    /// Absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`FixedError::Overflow`] for `MIN`.
    #[inline]
    pub fn safe_abs(self) -> FixedResult<Self> {
        self.0.checked_abs().map(Self).ok_or(FixedError::Overflow)
    }

    /// Checked negation. Returns `None` for `MIN`.
    #[inline]
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Drops the fractional bits (rounds toward negative infinity).
    #[inline]
    #[must_use]
    pub const fn floor(self) -> Self {
        Self((self.0 >> FRAC_BITS) << FRAC_BITS)
    }

    /// Square root, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`FixedError::NegativeInput`] if `self < 0`.
    pub fn sqrt(self) -> FixedResult<Self> {
        if self.is_negative() {
            return Err(FixedError::NegativeInput);
        }
        let root = wide::sqrtu(self.magnitude() << 64_usize);
        i128::try_from(wide::narrow(root)?)
            .map(Self)
            .map_err(|_| FixedError::Overflow)
    }

    /// Magnitude widened for the 256-bit kernels.
    #[inline]
    fn magnitude(self) -> U256 {
        widen(self.0.unsigned_abs())
    }

    /// Reapplies a sign to a magnitude, checking the signed range.
    #[inline]
    fn with_sign(negative: bool, magnitude: u128) -> FixedResult<Self> {
        if negative {
            if magnitude > NEG_LIMIT {
                Err(FixedError::Overflow)
            } else {
                Ok(Self(0_i128.wrapping_sub_unsigned(magnitude)))
            }
        } else {
            i128::try_from(magnitude)
                .map(Self)
                .map_err(|_| FixedError::Overflow)
        }
    }
}

impl Neg for Fixed {
    type Output = Self;

    /// Unchecked at this layer: `MIN` maps to itself. Use
    /// [`Fixed::checked_neg`] where `MIN` can occur.
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl From<i64> for Fixed {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl fmt::Display for Fixed {
    /// Decimal rendering with nine fractional digits, truncated toward zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude >> FRAC_BITS;
        let fraction = magnitude & u128::from(u64::MAX);
        let digits = (fraction * 1_000_000_000) >> FRAC_BITS;
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{whole}.{digits:09}")
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({self}, raw={})", self.0)
    }
}
