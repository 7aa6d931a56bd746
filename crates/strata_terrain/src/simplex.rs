//! # Fixed-Point Simplex Noise
//!
//! 3D simplex noise evaluated entirely in 64.64 arithmetic.
//!
//! ## Algorithm
//!
//! 1. Skew the point into simplex space and find the origin cell
//! 2. Rank the offset components to pick the other three corners
//! 3. Hash each corner with three chained `permute` rounds
//! 4. Map the hash onto a 7x7 gradient grid folded over an octahedron
//! 5. Weight each corner by `max(0.5 - |d|^2, 0)^4` and sum
//!
//! ## Determinism Guarantee
//!
//! Every intermediate is a checked `Fixed` operation, so the result is the
//! same raw integer on every platform and matches the ledger bit-for-bit.
//! Any overflow aborts the whole evaluation.

use strata_fixed::{Fixed, FixedResult, Vec3, Vec4};

use crate::gradient::{
    max, permute, step, taylor_inv_sqrt, GRAD_NS_X, GRAD_NS_Y, GRAD_NS_Z, GRID_CELLS, GRID_ROW,
    NORMALIZATION, PERMUTE_MOD, SKEW_C_X, SKEW_C_Y,
};

const TWO: Fixed = Fixed::from_int(2);

/// Samples 3D simplex noise at `point`.
///
/// The result is nominally within `[-1, 1]`.
///
/// # Errors
///
/// Returns the first [`strata_fixed::FixedError`] raised by any inner
/// operation. Coordinates whose skewed sum leaves the 64.64 range fail
/// with `Overflow`.
pub fn noise(point: Vec3) -> FixedResult<Fixed> {
    // First corner
    let i = point.add_scalar(point.dot(Vec3::splat(SKEW_C_Y))?)?.floor();
    let x0 = point
        .safe_sub(i)?
        .add_scalar(i.dot(Vec3::splat(SKEW_C_X))?)?;

    // Other corners. Ties resolve through `step`, so equal offsets are
    // ranked as if x >= y >= z held in every comparison.
    let g = Vec3::new(step(x0.y, x0.x), step(x0.z, x0.y), step(x0.x, x0.z));
    let l = Vec3::splat(Fixed::ONE).safe_sub(g)?;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0.safe_sub(i1)?.add_scalar(SKEW_C_X)?;
    let x2 = x0.safe_sub(i2)?.add_scalar(SKEW_C_Y)?;
    let x3 = x0.safe_sub(Vec3::splat(Fixed::HALF))?;

    // Permutations
    let i = i.rem_scalar(PERMUTE_MOD)?;
    let p = permute(Vec4::splat(i.z).safe_add(corner_offsets(i1.z, i2.z))?)?;
    let p = permute(p.add_scalar(i.y)?.safe_add(corner_offsets(i1.y, i2.y))?)?;
    let p = permute(p.add_scalar(i.x)?.safe_add(corner_offsets(i1.x, i2.x))?)?;

    // Gradients: 7x7 points over a square, mapped onto an octahedron.
    // GRAD_NS_Z is truncated, so exact multiples of 7 and 49 land one cell
    // short. The ledger does the same.
    let j = p.safe_sub(
        p.mul_scalar(GRAD_NS_Z)?
            .mul_scalar(GRAD_NS_Z)?
            .floor()
            .mul_scalar(GRID_CELLS)?,
    )?;

    let x_ = j.mul_scalar(GRAD_NS_Z)?.floor();
    let y_ = j.safe_sub(x_.mul_scalar(GRID_ROW)?)?.floor();

    let x = x_.mul_scalar(GRAD_NS_X)?.add_scalar(GRAD_NS_Y)?;
    let y = y_.mul_scalar(GRAD_NS_X)?.add_scalar(GRAD_NS_Y)?;
    let h = Vec4::splat(Fixed::ONE)
        .safe_sub(x.safe_abs()?)?
        .safe_sub(y.safe_abs()?)?;

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor().mul_scalar(TWO)?.add_scalar(Fixed::ONE)?;
    let s1 = b1.floor().mul_scalar(TWO)?.add_scalar(Fixed::ONE)?;
    let sh = below_octahedron(h);

    let a0 = b0.xzyw().safe_add(s0.xzyw().safe_mul(sh.xxyy())?)?;
    let a1 = b1.xzyw().safe_add(s1.xzyw().safe_mul(sh.zzww())?)?;

    let p0 = Vec3::new(a0.x, a0.y, h.x);
    let p1 = Vec3::new(a0.z, a0.w, h.y);
    let p2 = Vec3::new(a1.x, a1.y, h.z);
    let p3 = Vec3::new(a1.z, a1.w, h.w);

    // Normalise gradients
    let norm = taylor_inv_sqrt(Vec4::new(p0.dot(p0)?, p1.dot(p1)?, p2.dot(p2)?, p3.dot(p3)?))?;
    let p0 = p0.mul_scalar(norm.x)?;
    let p1 = p1.mul_scalar(norm.y)?;
    let p2 = p2.mul_scalar(norm.z)?;
    let p3 = p3.mul_scalar(norm.w)?;

    // Mix final noise value
    let m = Vec4::new(falloff(x0)?, falloff(x1)?, falloff(x2)?, falloff(x3)?);
    let m2 = m.safe_mul(m)?;
    let m4 = m2.safe_mul(m2)?;

    let pdotx = Vec4::new(p0.dot(x0)?, p1.dot(x1)?, p2.dot(x2)?, p3.dot(x3)?);

    NORMALIZATION.safe_mul(m4.dot(pdotx)?)
}

/// `(0, a, b, 1)`: per-corner lattice offsets along one axis.
#[inline]
const fn corner_offsets(a: Fixed, b: Fixed) -> Vec4 {
    Vec4::new(Fixed::ZERO, a, b, Fixed::ONE)
}

/// `-1` where the gradient falls below the octahedron (`h <= 0`), else `0`.
#[inline]
fn below_octahedron(h: Vec4) -> Vec4 {
    Vec4::new(
        -step(h.x, Fixed::ZERO),
        -step(h.y, Fixed::ZERO),
        -step(h.z, Fixed::ZERO),
        -step(h.w, Fixed::ZERO),
    )
}

/// `max(0.5 - |offset|^2, 0)`
#[inline]
fn falloff(offset: Vec3) -> FixedResult<Fixed> {
    Ok(max(Fixed::HALF.safe_sub(offset.dot(offset)?)?, Fixed::ZERO))
}
