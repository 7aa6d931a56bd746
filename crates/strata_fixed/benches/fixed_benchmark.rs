//! Benchmark for the 64.64 arithmetic kernels.
//!
//! Run with: cargo bench --package strata_fixed --bench fixed_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_fixed::{Fixed, Vec4};

fn benchmark_mul(c: &mut Criterion) {
    let a = Fixed::from_raw(-61_489_146_912_365_172_053);
    let b = Fixed::from_raw(25_825_441_703_193_372_262);

    c.bench_function("fixed_mul", |bench| {
        bench.iter(|| black_box(a).safe_mul(black_box(b)));
    });
}

fn benchmark_div(c: &mut Criterion) {
    let a = Fixed::from_int(1_000_003);
    let b = Fixed::from_raw(7_549_213_684_137_908_160);

    c.bench_function("fixed_div", |bench| {
        bench.iter(|| black_box(a).safe_div(black_box(b)));
    });
}

fn benchmark_sqrt(c: &mut Criterion) {
    let x = Fixed::from_raw(26_087_635_650_665_564_424);

    c.bench_function("fixed_sqrt", |bench| {
        bench.iter(|| black_box(x).sqrt());
    });
}

fn benchmark_vec4_dot(c: &mut Criterion) {
    let v = Vec4::new(
        Fixed::HALF,
        Fixed::from_int(-3),
        Fixed::from_raw(9_223_372_036_854_775_808),
        Fixed::ONE,
    );

    c.bench_function("vec4_dot", |bench| {
        bench.iter(|| black_box(v).dot(black_box(v)));
    });
}

criterion_group!(
    benches,
    benchmark_mul,
    benchmark_div,
    benchmark_sqrt,
    benchmark_vec4_dot
);
criterion_main!(benches);
