//! # Fixed-Point Error Types
//!
//! Every way a 64.64 computation can fail.
//!
//! None of these are recoverable inside a single evaluation: a defaulted
//! value would silently disagree with the ledger.

use thiserror::Error;

/// Errors raised by fixed-point and vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedError {
    /// Result does not fit the signed 128-bit raw range.
    #[error("arithmetic overflow in 64.64 calculation")]
    Overflow,

    /// Divisor (or modulus) was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value.
    #[error("square root of a negative value")]
    NegativeInput,

    /// Integer conversion input outside the signed 64-bit range.
    #[error("integer out of range for 64.64 conversion")]
    OutOfRange,
}

/// Result type for fixed-point operations.
pub type FixedResult<T> = Result<T, FixedError>;
