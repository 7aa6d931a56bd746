//! # STRATA Terrain Generation
//!
//! Ledger-exact simplex noise and biome classification for hex maps.
//!
//! ## Design Principles
//!
//! 1. **Bit-exact**: every tile evaluates to the raw integers the ledger computes
//! 2. **Pure**: no state between calls; any thread may evaluate any tile
//! 3. **Fail loudly**: an arithmetic failure is reported, never papered over
//!
//! ## Core Components
//!
//! - `noise`: single-sample 3D simplex noise in 64.64
//! - `noise_octaves`: multi-octave composition
//! - `BiomeClassifier`: elevation/moisture channels and the biome table
//! - `TerrainConfig`: TOML tunables, defaulting to the ledger's values
//!
//! ## Example
//!
//! ```rust
//! use strata_terrain::{Biome, BiomeClassifier};
//!
//! let classifier = BiomeClassifier::ledger();
//! assert_eq!(classifier.biome(0, 0)?, Biome::Ocean);
//! # Ok::<(), strata_fixed::FixedError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod config;
pub mod error;
pub mod gradient;
pub mod octaves;
pub mod region;
pub mod simplex;

pub use biome::{Biome, BiomeClassifier};
pub use config::{DetailConfig, LevelConfig, Ratio, TerrainConfig};
pub use error::{ConfigError, TileError};
pub use octaves::noise_octaves;
pub use region::BiomeRegion;
pub use simplex::noise;
