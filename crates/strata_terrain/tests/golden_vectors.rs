//! # Golden Vector Tests
//!
//! Raw 64.64 outputs captured once from a reference evaluation and pinned
//! here. A failure means the terrain no longer matches the ledger: treat
//! it as a compatibility break, not a refactor.

use strata_fixed::{Fixed, Vec3};
use strata_terrain::{noise, noise_octaves, BiomeClassifier};

fn ratio(num: i64, den: i64) -> Fixed {
    Fixed::from_ratio(num, den).unwrap()
}

fn sample_point() -> Vec3 {
    Vec3::new(ratio(10, 3), ratio(-7, 5), ratio(1, 2))
}

#[test]
fn test_sample_point_encoding() {
    let p = sample_point();
    assert_eq!(p.x.raw(), 61_489_146_912_365_172_053);
    assert_eq!(p.y.raw(), -25_825_441_703_193_372_262);
    assert_eq!(p.z.raw(), 9_223_372_036_854_775_808);
}

/// Hex (col=10, row=7) at z=0. All three skewed offsets are equal here,
/// so this also pins the tie-breaking of the corner ranking.
#[test]
fn test_noise_hex_10_7() {
    let p = Vec3::new(Fixed::from_int(10), Fixed::from_int(7), Fixed::ZERO);
    assert_eq!(noise(p).unwrap().raw(), -25_500_565_208_712_365_310);
}

#[test]
fn test_noise_origin() {
    assert_eq!(noise(Vec3::ZERO).unwrap().raw(), -8_040_438_090_352_673_145);
}

#[test]
fn test_noise_fractional_point() {
    assert_eq!(noise(sample_point()).unwrap().raw(), -14_615_210_051_140_308_645);
}

#[test]
fn test_noise_negative_cell() {
    let p = Vec3::new(Fixed::from_int(-123), ratio(45, 7), ratio(-9, 4));
    assert_eq!(noise(p).unwrap().raw(), 7_549_213_684_137_908_160);
}

#[test]
fn test_noise_is_repeatable() {
    let p = Vec3::new(Fixed::from_int(-123), ratio(45, 7), ratio(-9, 4));
    let first = noise(p).unwrap();
    for _ in 0..8 {
        assert_eq!(noise(p).unwrap().raw(), first.raw());
    }
}

#[test]
fn test_octaves() {
    let p = sample_point();
    let half = Fixed::HALF;
    assert_eq!(noise_octaves(p, 1, half), noise(p));
    assert_eq!(
        noise_octaves(p, 4, half).unwrap().raw(),
        -7_450_201_853_345_472_549
    );
}

#[test]
fn test_elevation_and_moisture() {
    let classifier = BiomeClassifier::ledger();
    let cases: [(i64, i64, i128, i128); 4] = [
        (10, 7, 5_527_191_094_678_158_243, 6_640_827_866_535_438_581),
        (100, 200, 8_540_159_293_384_051_674, 21_398_223_125_503_079_874),
        (-50, 30, 8_792_948_008_468_219_603, 4_796_153_459_164_483_420),
        (
            2_147_483_646,
            2_147_483_646,
            10_268_687_534_364_983_732,
            8_301_034_833_169_298_227,
        ),
    ];

    for (col, row, elevation, moisture) in cases {
        assert_eq!(classifier.elevation(col, row).unwrap().raw(), elevation, "({col}, {row})");
        assert_eq!(classifier.moisture(col, row).unwrap().raw(), moisture, "({col}, {row})");
    }
}

/// The sample here is below -1, so moisture leaves `[0, 1]`. The ledger
/// computes the same value.
#[test]
fn test_moisture_below_zero() {
    let classifier = BiomeClassifier::ledger();
    assert_eq!(
        classifier.moisture(-563, -477).unwrap().raw(),
        -3_504_881_374_004_814_807
    );
}

#[test]
fn test_detail_channel() {
    let classifier = BiomeClassifier::ledger();
    assert_eq!(classifier.detail(10, 7).unwrap().raw(), -6_567_415_411_274_906_593);
    assert_eq!(
        classifier.detail(-600, -600).unwrap().raw(),
        27_740_127_780_721_949_823
    );
}
