//! # Terrain Error Types
//!
//! Configuration failures and per-tile evaluation failures.

use strata_fixed::FixedError;
use thiserror::Error;

/// Errors raised while loading or applying a [`crate::TerrainConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read terrain config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse TOML content.
    #[error("failed to parse terrain config: {0}")]
    Parse(#[source] toml::de::Error),

    /// Failed to serialize the config to TOML.
    #[error("failed to serialize terrain config: {0}")]
    Serialize(#[source] toml::ser::Error),

    /// A configured value cannot be encoded in 64.64.
    #[error("invalid terrain parameter `{field}`: {source}")]
    Invalid {
        /// Offending config field.
        field: &'static str,
        /// Underlying encoding failure.
        #[source]
        source: FixedError,
    },
}

/// A tile whose terrain could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("tile ({col}, {row}) failed: {source}")]
pub struct TileError {
    /// Hex column.
    pub col: i64,
    /// Hex row.
    pub row: i64,
    /// Failure raised by the fixed-point pipeline.
    #[source]
    pub source: FixedError,
}
