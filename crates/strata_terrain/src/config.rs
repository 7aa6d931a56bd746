//! # Terrain Configuration
//!
//! TOML-backed tunables for the biome classifier. Every value is an exact
//! integer ratio, so a config file can never smuggle a float into the
//! terrain path.
//!
//! The defaults are the ledger's constants; a classifier built from
//! `TerrainConfig::default()` agrees with the ledger on every tile.
//!
//! ```toml
//! map_amplitude = { num = 60, den = 1 }
//!
//! [levels]
//! ocean = { num = 45, den = 100 }
//!
//! [detail]
//! octaves = 6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_fixed::{Fixed, FixedResult};

use crate::error::ConfigError;

/// Exact rational parameter, encoded with [`Fixed::from_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    /// Numerator
    pub num: i64,
    /// Denominator
    pub den: i64,
}

impl Ratio {
    /// Creates a ratio.
    #[must_use]
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// A whole number.
    #[must_use]
    pub const fn whole(value: i64) -> Self {
        Self::new(value, 1)
    }

    /// Encodes the ratio as 64.64.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero denominator; `Overflow` if the quotient
    /// leaves the 64.64 range.
    pub fn to_fixed(self) -> FixedResult<Fixed> {
        Fixed::from_ratio(self.num, self.den)
    }

    /// Encodes the ratio, tagging a failure with the config field name.
    pub(crate) fn encode(self, field: &'static str) -> Result<Fixed, ConfigError> {
        self.to_fixed()
            .map_err(|source| ConfigError::Invalid { field, source })
    }
}

/// Elevation cut-offs between biome bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Below this: deep ocean.
    pub deep_ocean: Ratio,
    /// Below this: ocean.
    pub ocean: Ratio,
    /// Below this: beach.
    pub sand: Ratio,
    /// Above this: temperate bands.
    pub forest: Ratio,
    /// Above this: highland desert bands.
    pub desert: Ratio,
    /// Above this: mountain bands.
    pub mountain: Ratio,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            deep_ocean: Ratio::new(25, 100),
            ocean: Ratio::new(50, 100),
            sand: Ratio::new(53, 100),
            forest: Ratio::new(60, 100),
            desert: Ratio::new(72, 100),
            mountain: Ratio::new(80, 100),
        }
    }
}

/// Octave compositor settings for the detail channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    /// Number of octaves. Zero makes every detail sample fail.
    pub octaves: u32,
    /// Amplitude multiplier between octaves.
    pub persistence: Ratio,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: Ratio::new(1, 2),
        }
    }
}

/// Complete terrain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Tiles per noise unit.
    pub map_amplitude: Ratio,
    /// Frequency multiplier of the moisture channel.
    pub moisture_octave: Ratio,
    /// Elevation octave weights; each also divides the sample coordinate.
    pub elevation_octaves: Vec<Ratio>,
    /// Elevation bands.
    pub levels: LevelConfig,
    /// Detail channel.
    pub detail: DetailConfig,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            map_amplitude: Ratio::whole(60),
            moisture_octave: Ratio::whole(2),
            elevation_octaves: vec![Ratio::whole(1), Ratio::new(1, 4), Ratio::new(1, 10)],
            levels: LevelConfig::default(),
            detail: DetailConfig::default(),
        }
    }
}

impl TerrainConfig {
    /// Loads a config from a TOML file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            "Loaded terrain config from {} ({} elevation octaves)",
            path.display(),
            config.elevation_octaves.len()
        );
        Ok(config)
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML or mistyped fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Serialize`] if the TOML writer rejects the layout.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_fixed::FixedError;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TerrainConfig::from_toml_str("").unwrap();
        assert_eq!(config, TerrainConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let text = r"
            map_amplitude = { num = 80, den = 1 }

            [levels]
            ocean = { num = 45, den = 100 }
        ";
        let config = TerrainConfig::from_toml_str(text).unwrap();
        assert_eq!(config.map_amplitude, Ratio::whole(80));
        assert_eq!(config.levels.ocean, Ratio::new(45, 100));
        assert_eq!(config.levels.sand, Ratio::new(53, 100));
        assert_eq!(config.detail, DetailConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = TerrainConfig::default();
        config.detail.octaves = 6;
        config.elevation_octaves.push(Ratio::new(1, 20));
        let text = config.to_toml_string().unwrap();
        assert_eq!(TerrainConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_float_values_are_rejected() {
        let result = TerrainConfig::from_toml_str("map_amplitude = { num = 60.5, den = 1 }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_denominator_is_invalid() {
        let err = Ratio::new(1, 0).encode("detail.persistence").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "detail.persistence",
                source: FixedError::DivisionByZero
            }
        ));
    }

    #[test]
    fn test_ratio_encoding() {
        assert_eq!(Ratio::whole(60).to_fixed(), Ok(Fixed::from_int(60)));
        assert_eq!(Ratio::new(1, 2).to_fixed(), Ok(Fixed::HALF));
    }
}
