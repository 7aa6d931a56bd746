//! # Biome Classification
//!
//! Determines the ledger biome of a hex tile from two noise channels.
//!
//! - Elevation: weighted sum over several coordinate scales
//! - Moisture: a single higher-frequency sample
//!
//! Both channels sample `noise(x, 0, z)`, rescale it to `[0, 100]`, floor
//! it to an integer percentage, and divide by 100 again. Every step is the
//! same checked 64.64 operation the ledger performs, in the same order.

use std::fmt;

use strata_fixed::{Fixed, FixedError, FixedResult, Vec3};

use crate::config::TerrainConfig;
use crate::error::ConfigError;
use crate::octaves::noise_octaves;
use crate::simplex::noise;

const TWO: Fixed = Fixed::from_int(2);
const HUNDRED: Fixed = Fixed::from_int(100);

/// Moisture cut-offs, as `Fixed::from_ratio` encodes them.
mod moisture_level {
    use strata_fixed::Fixed;

    pub(super) const P10: Fixed = Fixed::from_raw(1_844_674_407_370_955_161);
    pub(super) const P16: Fixed = Fixed::from_raw(2_951_479_051_793_528_258);
    pub(super) const P33: Fixed = Fixed::from_raw(6_087_425_544_324_152_033);
    pub(super) const P40: Fixed = Fixed::from_raw(7_378_697_629_483_820_646);
    pub(super) const P50: Fixed = Fixed::HALF;
    pub(super) const P66: Fixed = Fixed::from_raw(12_174_851_088_648_304_066);
    pub(super) const P83: Fixed = Fixed::from_raw(15_310_797_581_178_927_841);
}

/// Ledger biomes.
///
/// Discriminants are the ledger's ids; 0 means "unexplored" there and has
/// no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Biome {
    /// Elevation below the deep-ocean level
    DeepOcean = 1,
    /// Shallow ocean
    Ocean = 2,
    /// Coastline sand
    Beach = 3,
    /// Dry mountain
    Scorched = 4,
    /// Rocky mountain
    Bare = 5,
    /// Cold mountain
    Tundra = 6,
    /// Wet mountain
    Snow = 7,
    /// Dry highland or temperate lowland
    TemperateDesert = 8,
    /// Highland scrub
    Shrubland = 9,
    /// Wet highland forest
    Taiga = 10,
    /// Temperate or tropical grass
    Grassland = 11,
    /// Temperate forest
    TemperateDeciduousForest = 12,
    /// Wet temperate forest
    TemperateRainForest = 13,
    /// Dry lowland
    SubtropicalDesert = 14,
    /// Tropical forest
    TropicalSeasonalForest = 15,
    /// Wet tropical forest
    TropicalRainForest = 16,
}

impl Biome {
    /// Every biome in id order.
    pub const ALL: [Self; 16] = [
        Self::DeepOcean,
        Self::Ocean,
        Self::Beach,
        Self::Scorched,
        Self::Bare,
        Self::Tundra,
        Self::Snow,
        Self::TemperateDesert,
        Self::Shrubland,
        Self::Taiga,
        Self::Grassland,
        Self::TemperateDeciduousForest,
        Self::TemperateRainForest,
        Self::SubtropicalDesert,
        Self::TropicalSeasonalForest,
        Self::TropicalRainForest,
    ];

    /// Ledger id (1..=16).
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Converts from a ledger id. `None` for 0 and anything above 16.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if id == 0 || id as usize > Self::ALL.len() {
            None
        } else {
            Some(Self::ALL[id as usize - 1])
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepOcean => "Deep Ocean",
            Self::Ocean => "Ocean",
            Self::Beach => "Beach",
            Self::Scorched => "Scorched",
            Self::Bare => "Bare",
            Self::Tundra => "Tundra",
            Self::Snow => "Snow",
            Self::TemperateDesert => "Temperate Desert",
            Self::Shrubland => "Shrubland",
            Self::Taiga => "Taiga",
            Self::Grassland => "Grassland",
            Self::TemperateDeciduousForest => "Temperate Deciduous Forest",
            Self::TemperateRainForest => "Temperate Rain Forest",
            Self::SubtropicalDesert => "Subtropical Desert",
            Self::TropicalSeasonalForest => "Tropical Seasonal Forest",
            Self::TropicalRainForest => "Tropical Rain Forest",
        }
    }

    /// One-character map symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::DeepOcean => '~',
            Self::Ocean => '-',
            Self::Beach => '.',
            Self::Scorched => 'X',
            Self::Bare => 'B',
            Self::Tundra => 'U',
            Self::Snow => '*',
            Self::TemperateDesert => 'd',
            Self::Shrubland => 's',
            Self::Taiga => 't',
            Self::Grassland => 'g',
            Self::TemperateDeciduousForest => 'f',
            Self::TemperateRainForest => 'r',
            Self::SubtropicalDesert => 'D',
            Self::TropicalSeasonalForest => 'F',
            Self::TropicalRainForest => 'R',
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoded elevation cut-offs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Levels {
    deep_ocean: Fixed,
    ocean: Fixed,
    sand: Fixed,
    forest: Fixed,
    desert: Fixed,
    mountain: Fixed,
}

/// Biome classifier that determines biome from hex coordinates.
///
/// Holds the configured parameters already encoded as 64.64 so no
/// evaluation repeats a conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeClassifier {
    amplitude: Fixed,
    moisture_octave: Fixed,
    elevation_octaves: Vec<Fixed>,
    octave_sum: Fixed,
    levels: Levels,
    detail_octaves: u32,
    detail_persistence: Fixed,
}

impl BiomeClassifier {
    /// Builds a classifier from a configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if a ratio cannot be encoded, the amplitude
    /// is zero, or the elevation octaves sum to zero.
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        let amplitude = config.map_amplitude.encode("map_amplitude")?;
        if amplitude.is_zero() {
            return Err(ConfigError::Invalid {
                field: "map_amplitude",
                source: FixedError::DivisionByZero,
            });
        }

        let elevation_octaves = config
            .elevation_octaves
            .iter()
            .map(|octave| octave.encode("elevation_octaves"))
            .collect::<Result<Vec<_>, _>>()?;
        let octave_sum = elevation_octaves
            .iter()
            .try_fold(Fixed::ZERO, |sum, &octave| sum.safe_add(octave))
            .map_err(|source| ConfigError::Invalid {
                field: "elevation_octaves",
                source,
            })?;
        if octave_sum.is_zero() {
            return Err(ConfigError::Invalid {
                field: "elevation_octaves",
                source: FixedError::DivisionByZero,
            });
        }

        let levels = &config.levels;
        let classifier = Self {
            amplitude,
            moisture_octave: config.moisture_octave.encode("moisture_octave")?,
            elevation_octaves,
            octave_sum,
            levels: Levels {
                deep_ocean: levels.deep_ocean.encode("levels.deep_ocean")?,
                ocean: levels.ocean.encode("levels.ocean")?,
                sand: levels.sand.encode("levels.sand")?,
                forest: levels.forest.encode("levels.forest")?,
                desert: levels.desert.encode("levels.desert")?,
                mountain: levels.mountain.encode("levels.mountain")?,
            },
            detail_octaves: config.detail.octaves,
            detail_persistence: config.detail.persistence.encode("detail.persistence")?,
        };

        tracing::debug!(
            "Built biome classifier: amplitude={}, {} elevation octaves, detail octaves={}",
            classifier.amplitude,
            classifier.elevation_octaves.len(),
            classifier.detail_octaves
        );
        Ok(classifier)
    }

    /// The ledger's own parameters, as pinned raw constants.
    #[must_use]
    pub fn ledger() -> Self {
        Self {
            amplitude: Fixed::from_int(60),
            moisture_octave: TWO,
            elevation_octaves: vec![
                Fixed::ONE,
                Fixed::from_raw(4_611_686_018_427_387_904),
                Fixed::from_raw(1_844_674_407_370_955_161),
            ],
            octave_sum: Fixed::from_raw(24_903_104_499_507_894_681),
            levels: Levels {
                deep_ocean: Fixed::from_raw(4_611_686_018_427_387_904),
                ocean: Fixed::HALF,
                sand: Fixed::from_raw(9_776_774_359_066_062_356),
                forest: Fixed::from_raw(11_068_046_444_225_730_969),
                desert: Fixed::from_raw(13_281_655_733_070_877_163),
                mountain: Fixed::from_raw(14_757_395_258_967_641_292),
            },
            detail_octaves: 4,
            detail_persistence: Fixed::HALF,
        }
    }

    /// Tiles per noise unit.
    #[must_use]
    pub const fn amplitude(&self) -> Fixed {
        self.amplitude
    }

    /// `floor(((noise(x, 0, z) + 1) * 100) / 2)`, an integer in `[0, 100]`
    /// for in-band noise.
    fn percent_sample(x: Fixed, z: Fixed) -> FixedResult<Fixed> {
        let n = noise(Vec3::new(x, Fixed::ZERO, z))?;
        Ok(n.safe_add(Fixed::ONE)?
            .safe_mul(HUNDRED)?
            .safe_div(TWO)?
            .floor())
    }

    /// Elevation of a tile, nominally in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Propagates any fixed-point failure.
    pub fn elevation(&self, col: i64, row: i64) -> FixedResult<Fixed> {
        let col = Fixed::from_int(col);
        let row = Fixed::from_int(row);

        let mut total = Fixed::ZERO;
        for &octave in &self.elevation_octaves {
            let x = col.safe_div(octave)?.safe_div(self.amplitude)?;
            let z = row.safe_div(octave)?.safe_div(self.amplitude)?;
            total = total.safe_add(octave.safe_mul(Self::percent_sample(x, z)?)?)?;
        }

        total.safe_div(self.octave_sum)?.safe_div(HUNDRED)
    }

    /// Moisture of a tile, nominally in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Propagates any fixed-point failure.
    pub fn moisture(&self, col: i64, row: i64) -> FixedResult<Fixed> {
        let x = self
            .moisture_octave
            .safe_mul(Fixed::from_int(col))?
            .safe_div(self.amplitude)?;
        let z = self
            .moisture_octave
            .safe_mul(Fixed::from_int(row))?
            .safe_div(self.amplitude)?;

        Self::percent_sample(x, z)?.safe_div(HUNDRED)
    }

    /// Maps an elevation/moisture pair onto a biome.
    #[must_use]
    pub fn classify(&self, elevation: Fixed, moisture: Fixed) -> Biome {
        let levels = &self.levels;

        if elevation < levels.deep_ocean {
            return Biome::DeepOcean;
        }
        if elevation < levels.ocean {
            return Biome::Ocean;
        }
        if elevation < levels.sand {
            return Biome::Beach;
        }

        if elevation > levels.mountain {
            return if moisture < moisture_level::P10 {
                Biome::Scorched
            } else if moisture < moisture_level::P40 {
                Biome::Bare
            } else if moisture < moisture_level::P50 {
                Biome::Tundra
            } else {
                Biome::Snow
            };
        }

        if elevation > levels.desert {
            return if moisture < moisture_level::P33 {
                Biome::TemperateDesert
            } else if moisture < moisture_level::P66 {
                Biome::Shrubland
            } else {
                Biome::Taiga
            };
        }

        if elevation > levels.forest {
            return if moisture < moisture_level::P16 {
                Biome::TemperateDesert
            } else if moisture < moisture_level::P50 {
                Biome::Grassland
            } else if moisture < moisture_level::P83 {
                Biome::TemperateDeciduousForest
            } else {
                Biome::TemperateRainForest
            };
        }

        if moisture < moisture_level::P16 {
            Biome::SubtropicalDesert
        } else if moisture < moisture_level::P33 {
            Biome::Grassland
        } else if moisture < moisture_level::P66 {
            Biome::TropicalSeasonalForest
        } else {
            Biome::TropicalRainForest
        }
    }

    /// Biome of a tile.
    ///
    /// # Errors
    ///
    /// Propagates any fixed-point failure from either channel.
    pub fn biome(&self, col: i64, row: i64) -> FixedResult<Biome> {
        let elevation = self.elevation(col, row)?;
        let moisture = self.moisture(col, row)?;
        Ok(self.classify(elevation, moisture))
    }

    /// Multi-octave detail value of a tile, sampled at
    /// `(col / amplitude, 0, row / amplitude)`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the detail channel has zero octaves, plus any
    /// failure from [`noise_octaves`].
    pub fn detail(&self, col: i64, row: i64) -> FixedResult<Fixed> {
        let point = Vec3::new(
            Fixed::from_int(col).safe_div(self.amplitude)?,
            Fixed::ZERO,
            Fixed::from_int(row).safe_div(self.amplitude)?,
        );
        noise_octaves(point, self.detail_octaves, self.detail_persistence)
    }
}
