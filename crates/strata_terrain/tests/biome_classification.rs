//! # Biome Classification Tests
//!
//! Pins the biome of tiles covering every ledger biome, checks region
//! sampling, and loads classifiers from config files on disk.

use std::collections::BTreeMap;

use strata_terrain::{Biome, BiomeClassifier, ConfigError, Ratio, TerrainConfig};

/// One tile per biome, plus a few ocean tiles near the origin.
const TILES: [(i64, i64, Biome); 21] = [
    (10, 7, Biome::Ocean),
    (0, 0, Biome::Ocean),
    (100, 200, Biome::Ocean),
    (-50, 30, Biome::Ocean),
    (2_147_483_646, 2_147_483_646, Biome::TropicalSeasonalForest),
    (2_147_483_661, 2_147_483_606, Biome::Ocean),
    (-600, -600, Biome::Snow),
    (-600, -354, Biome::DeepOcean),
    (-600, -436, Biome::Shrubland),
    (-600, -231, Biome::TemperateDesert),
    (-600, 97, Biome::TropicalSeasonalForest),
    (-600, 138, Biome::TemperateDeciduousForest),
    (-563, -477, Biome::SubtropicalDesert),
    (-563, -395, Biome::Grassland),
    (-563, -272, Biome::Bare),
    (-563, -108, Biome::Beach),
    (-563, 15, Biome::TropicalRainForest),
    (-489, -354, Biome::Tundra),
    (-489, 56, Biome::TemperateRainForest),
    (-304, -477, Biome::Taiga),
    (-156, -149, Biome::Scorched),
];

#[test]
fn test_pinned_tiles() {
    let classifier = BiomeClassifier::ledger();
    for (col, row, expected) in TILES {
        assert_eq!(classifier.biome(col, row), Ok(expected), "({col}, {row})");
    }
}

#[test]
fn test_pinned_tiles_cover_every_biome() {
    let mut seen: Vec<Biome> = TILES.iter().map(|&(_, _, biome)| biome).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen, Biome::ALL.to_vec());
}

#[test]
fn test_region_map() {
    use Biome::{Beach, Grassland, Ocean, SubtropicalDesert};

    let region = BiomeClassifier::ledger().sample_region(-565, -110, 6, 4);
    assert!(region.is_complete());

    let expected = [
        [Grassland, Ocean, Ocean, Ocean, Ocean, Beach],
        [Grassland, Beach, Ocean, Ocean, Beach, Beach],
        [Grassland, Beach, Beach, Beach, Beach, SubtropicalDesert],
        [Grassland, Beach, Beach, Beach, SubtropicalDesert, SubtropicalDesert],
    ];
    for (dy, row) in (0u32..).zip(expected.iter()) {
        for (dx, biome) in (0u32..).zip(row.iter()) {
            assert_eq!(region.get(dx, dy), Some(*biome), "offset ({dx}, {dy})");
        }
    }

    let histogram: BTreeMap<Biome, usize> = [
        (Ocean, 6),
        (Beach, 11),
        (Grassland, 4),
        (SubtropicalDesert, 3),
    ]
    .into_iter()
    .collect();
    assert_eq!(region.histogram(), histogram);
}

#[test]
fn test_region_matches_single_tiles() {
    let classifier = BiomeClassifier::ledger();
    let region = classifier.sample_region(-490, -356, 6, 4);
    for dy in 0..4 {
        for dx in 0..6 {
            let tile = classifier.biome(-490 + i64::from(dx), -356 + i64::from(dy));
            assert_eq!(region.get(dx, dy), tile.ok());
        }
    }
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrain.toml");
    std::fs::write(
        &path,
        "[levels]\ndeep_ocean = { num = 35, den = 100 }\n",
    )
    .unwrap();

    let config = TerrainConfig::load(&path).unwrap();
    assert_eq!(config.levels.deep_ocean, Ratio::new(35, 100));

    // Elevation at (10, 7) is about 0.30: ocean on the ledger, deep ocean here.
    let classifier = BiomeClassifier::new(&config).unwrap();
    assert_eq!(classifier.biome(10, 7), Ok(Biome::DeepOcean));
    assert_eq!(BiomeClassifier::ledger().biome(10, 7), Ok(Biome::Ocean));
}

#[test]
fn test_saved_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrain.toml");

    let mut config = TerrainConfig::default();
    config.detail.octaves = 2;
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    let loaded = TerrainConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        BiomeClassifier::new(&loaded).unwrap().biome(-600, -600),
        Ok(Biome::Snow)
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = TerrainConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read(_))));
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrain.toml");
    std::fs::write(&path, "map_amplitude = \"sixty\"\n").unwrap();
    assert!(matches!(TerrainConfig::load(&path), Err(ConfigError::Parse(_))));
}
