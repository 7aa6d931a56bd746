//! # STRATA Fixed-Point Arithmetic
//!
//! Signed 64.64 fixed-point numbers and small vectors, bit-exact with the
//! on-chain terrain ledger.
//!
//! ## Design Principles
//!
//! 1. **Zero floating point** - values are `i128` raw counts of `2^-64`
//! 2. **Sign/magnitude products** - multiply and divide truncate toward zero
//! 3. **Checked everywhere** - leaving the representable range is an error
//!
//! ## Example
//!
//! ```rust
//! use strata_fixed::{Fixed, Vec3};
//!
//! let v = Vec3::splat(Fixed::from_ratio(3, 2)?);
//! assert_eq!(v.floor(), Vec3::splat(Fixed::ONE));
//! assert_eq!(v.dot(v)?.to_int(), 6);
//! # Ok::<(), strata_fixed::FixedError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod fixed_point;
pub mod vector;
pub mod wide;

pub use error::{FixedError, FixedResult};
pub use fixed_point::Fixed;
pub use vector::{Vec3, Vec4};
pub use wide::{divuu, widen};
