//! # Fixed-Point Vectors
//!
//! `Vec3` and `Vec4` are plain value aggregates of [`Fixed`]. Every
//! operation is component-wise over the scalar operation of the same name
//! and returns a fresh vector; the first failing component fails the whole
//! operation.

use crate::error::FixedResult;
use crate::fixed_point::Fixed;

/// 3D vector of fixed-point components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3 {
    /// X component
    pub x: Fixed,
    /// Y component
    pub y: Fixed,
    /// Z component
    pub z: Fixed,
}

impl Vec3 {
    /// Zero vector
    pub const ZERO: Self = Self::splat(Fixed::ZERO);

    /// Creates a new Vec3
    #[inline]
    #[must_use]
    pub const fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }

    /// All components equal to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: Fixed) -> Self {
        Self::new(value, value, value)
    }

    /// Converts to array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [Fixed; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[inline]
    #[must_use]
    pub const fn from_array(arr: [Fixed; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// `(z, x, y)` swizzle.
    #[inline]
    #[must_use]
    pub const fn zxy(self) -> Self {
        Self::new(self.z, self.x, self.y)
    }

    #[inline]
    fn try_map(self, f: impl Fn(Fixed) -> FixedResult<Fixed>) -> FixedResult<Self> {
        Ok(Self::new(f(self.x)?, f(self.y)?, f(self.z)?))
    }

    #[inline]
    fn try_zip(self, rhs: Self, f: impl Fn(Fixed, Fixed) -> FixedResult<Fixed>) -> FixedResult<Self> {
        Ok(Self::new(f(self.x, rhs.x)?, f(self.y, rhs.y)?, f(self.z, rhs.z)?))
    }

    /// Component-wise addition.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn safe_add(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_add)
    }

    /// Component-wise subtraction.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn safe_sub(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_sub)
    }

    /// Component-wise sign/magnitude multiply.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn safe_mul(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_mul)
    }

    /// Component-wise sign/magnitude divide.
    ///
    /// # Errors
    ///
    /// Propagates division by zero or overflow from any component.
    #[inline]
    pub fn safe_div(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_div)
    }

    /// Component-wise raw remainder.
    ///
    /// # Errors
    ///
    /// Propagates division by zero or overflow from any component.
    #[inline]
    pub fn safe_rem(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_rem)
    }

    /// Component-wise floor.
    #[inline]
    #[must_use]
    pub const fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Component-wise absolute value.
    ///
    /// # Errors
    ///
    /// Fails if any component is `Fixed::MIN`.
    #[inline]
    pub fn safe_abs(self) -> FixedResult<Self> {
        self.try_map(Fixed::safe_abs)
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    /// Dot product, accumulated in `x, y, z` order.
    ///
    /// # Errors
    ///
    /// Any component multiply or running-sum overflow fails the whole product.
    #[inline]
    pub fn dot(self, rhs: Self) -> FixedResult<Fixed> {
        Fixed::ZERO
            .safe_add(self.x.safe_mul(rhs.x)?)?
            .safe_add(self.y.safe_mul(rhs.y)?)?
            .safe_add(self.z.safe_mul(rhs.z)?)
    }

    /// Adds `scalar` to every component.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn add_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_add(scalar))
    }

    /// Multiplies every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn mul_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_mul(scalar))
    }

    /// Divides every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Division by zero or overflow.
    #[inline]
    pub fn div_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_div(scalar))
    }

    /// Raw remainder of every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Division by zero or overflow.
    #[inline]
    pub fn rem_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_rem(scalar))
    }
}

/// 4D vector of fixed-point components.
///
/// The simplex evaluator carries one lane per simplex corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec4 {
    /// X component
    pub x: Fixed,
    /// Y component
    pub y: Fixed,
    /// Z component
    pub z: Fixed,
    /// W component
    pub w: Fixed,
}

impl Vec4 {
    /// Zero vector
    pub const ZERO: Self = Self::splat(Fixed::ZERO);

    /// Creates a new Vec4
    #[inline]
    #[must_use]
    pub const fn new(x: Fixed, y: Fixed, z: Fixed, w: Fixed) -> Self {
        Self { x, y, z, w }
    }

    /// All components equal to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: Fixed) -> Self {
        Self::new(value, value, value, value)
    }

    /// Converts to array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [Fixed; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates from array
    #[inline]
    #[must_use]
    pub const fn from_array(arr: [Fixed; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// `(x, z, y, w)` swizzle.
    #[inline]
    #[must_use]
    pub const fn xzyw(self) -> Self {
        Self::new(self.x, self.z, self.y, self.w)
    }

    /// `(x, x, y, y)` swizzle.
    #[inline]
    #[must_use]
    pub const fn xxyy(self) -> Self {
        Self::new(self.x, self.x, self.y, self.y)
    }

    /// `(z, z, w, w)` swizzle.
    #[inline]
    #[must_use]
    pub const fn zzww(self) -> Self {
        Self::new(self.z, self.z, self.w, self.w)
    }

    #[inline]
    fn try_map(self, f: impl Fn(Fixed) -> FixedResult<Fixed>) -> FixedResult<Self> {
        Ok(Self::new(f(self.x)?, f(self.y)?, f(self.z)?, f(self.w)?))
    }

    #[inline]
    fn try_zip(self, rhs: Self, f: impl Fn(Fixed, Fixed) -> FixedResult<Fixed>) -> FixedResult<Self> {
        Ok(Self::new(
            f(self.x, rhs.x)?,
            f(self.y, rhs.y)?,
            f(self.z, rhs.z)?,
            f(self.w, rhs.w)?,
        ))
    }

    /// Component-wise addition.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn safe_add(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_add)
    }

    /// Component-wise subtraction.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn safe_sub(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_sub)
    }

    /// Component-wise sign/magnitude multiply.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn safe_mul(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_mul)
    }

    /// Component-wise sign/magnitude divide.
    ///
    /// # Errors
    ///
    /// Propagates division by zero or overflow from any component.
    #[inline]
    pub fn safe_div(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_div)
    }

    /// Component-wise raw remainder.
    ///
    /// # Errors
    ///
    /// Propagates division by zero or overflow from any component.
    #[inline]
    pub fn safe_rem(self, rhs: Self) -> FixedResult<Self> {
        self.try_zip(rhs, Fixed::safe_rem)
    }

    /// Component-wise floor.
    #[inline]
    #[must_use]
    pub const fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor(), self.w.floor())
    }

    /// Component-wise absolute value.
    ///
    /// # Errors
    ///
    /// Fails if any component is `Fixed::MIN`.
    #[inline]
    pub fn safe_abs(self) -> FixedResult<Self> {
        self.try_map(Fixed::safe_abs)
    }

    /// Dot product, accumulated in `x, y, z, w` order.
    ///
    /// # Errors
    ///
    /// Any component multiply or running-sum overflow fails the whole product.
    #[inline]
    pub fn dot(self, rhs: Self) -> FixedResult<Fixed> {
        Fixed::ZERO
            .safe_add(self.x.safe_mul(rhs.x)?)?
            .safe_add(self.y.safe_mul(rhs.y)?)?
            .safe_add(self.z.safe_mul(rhs.z)?)?
            .safe_add(self.w.safe_mul(rhs.w)?)
    }

    /// Adds `scalar` to every component.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn add_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_add(scalar))
    }

    /// Multiplies every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Propagates the first component overflow.
    #[inline]
    pub fn mul_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_mul(scalar))
    }

    /// Divides every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Division by zero or overflow.
    #[inline]
    pub fn div_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_div(scalar))
    }

    /// Raw remainder of every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Division by zero or overflow.
    #[inline]
    pub fn rem_scalar(self, scalar: Fixed) -> FixedResult<Self> {
        self.try_map(|c| c.safe_rem(scalar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixedError;

    fn v3(x: i64, y: i64, z: i64) -> Vec3 {
        Vec3::new(Fixed::from_int(x), Fixed::from_int(y), Fixed::from_int(z))
    }

    fn v4(x: i64, y: i64, z: i64, w: i64) -> Vec4 {
        Vec4::new(
            Fixed::from_int(x),
            Fixed::from_int(y),
            Fixed::from_int(z),
            Fixed::from_int(w),
        )
    }

    #[test]
    fn test_component_arithmetic() {
        let a = v3(1, 2, 3);
        let b = v3(4, -5, 6);
        assert_eq!(a.safe_add(b), Ok(v3(5, -3, 9)));
        assert_eq!(a.safe_sub(b), Ok(v3(-3, 7, -3)));
        assert_eq!(a.safe_mul(b), Ok(v3(4, -10, 18)));
        assert_eq!(b.safe_div(v3(2, 5, 3)), Ok(v3(2, -1, 2)));
    }

    #[test]
    fn test_dot() {
        assert_eq!(v3(1, 2, 3).dot(v3(4, -5, 6)), Ok(Fixed::from_int(12)));
        assert_eq!(v4(1, 2, 3, 4).dot(v4(1, 1, 1, 1)), Ok(Fixed::from_int(10)));
    }

    #[test]
    fn test_dot_overflow_propagates() {
        let big = Vec3::splat(Fixed::MAX);
        assert_eq!(big.dot(big), Err(FixedError::Overflow));
    }

    #[test]
    fn test_scalar_broadcast() {
        let a = v4(3, -6, 9, 12);
        let three = Fixed::from_int(3);
        assert_eq!(a.div_scalar(three), Ok(v4(1, -2, 3, 4)));
        assert_eq!(a.mul_scalar(three), Ok(v4(9, -18, 27, 36)));
        assert_eq!(a.add_scalar(three), Ok(v4(6, -3, 12, 15)));
        assert_eq!(v4(7, -7, 8, 2).rem_scalar(three), Ok(v4(1, -1, 2, 2)));
        assert_eq!(a.div_scalar(Fixed::ZERO), Err(FixedError::DivisionByZero));
    }

    #[test]
    fn test_floor_abs() {
        let half = Fixed::HALF;
        let v = Vec3::new(half, -half, Fixed::from_int(2));
        assert_eq!(v.floor(), v3(0, -1, 2));
        assert_eq!(v.safe_abs(), Ok(Vec3::new(half, half, Fixed::from_int(2))));
        assert_eq!(
            Vec4::splat(Fixed::MIN).safe_abs(),
            Err(FixedError::Overflow)
        );
    }

    #[test]
    fn test_swizzles() {
        assert_eq!(v3(1, 2, 3).zxy(), v3(3, 1, 2));
        let v = v4(1, 2, 3, 4);
        assert_eq!(v.xzyw(), v4(1, 3, 2, 4));
        assert_eq!(v.xxyy(), v4(1, 1, 2, 2));
        assert_eq!(v.zzww(), v4(3, 3, 4, 4));
    }

    #[test]
    fn test_min_max() {
        let a = v3(1, 5, -2);
        let b = v3(3, 0, -2);
        assert_eq!(a.min(b), v3(1, 0, -2));
        assert_eq!(a.max(b), v3(3, 5, -2));
    }
}
