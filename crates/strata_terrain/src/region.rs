//! # Region Sampling
//!
//! Classifies a rectangular block of tiles for a world-generation caller.
//!
//! A tile whose evaluation fails is logged, recorded and left empty; the
//! rest of the region is still produced. No substitute biome is ever
//! written in its place, since a guessed value would silently disagree
//! with the ledger.

use std::collections::BTreeMap;

use strata_fixed::FixedError;

use crate::biome::{Biome, BiomeClassifier};
use crate::error::TileError;

/// Biomes of a rectangular block of tiles, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeRegion {
    origin_col: i64,
    origin_row: i64,
    width: u32,
    height: u32,
    tiles: Vec<Option<Biome>>,
    failures: Vec<TileError>,
}

impl BiomeRegion {
    /// Column of the top-left tile.
    #[must_use]
    pub const fn origin_col(&self) -> i64 {
        self.origin_col
    }

    /// Row of the top-left tile.
    #[must_use]
    pub const fn origin_row(&self) -> i64 {
        self.origin_row
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Biome at offset `(dx, dy)` from the origin.
    ///
    /// `None` if the offset is outside the region or the tile failed.
    #[must_use]
    pub fn get(&self, dx: u32, dy: u32) -> Option<Biome> {
        if dx >= self.width || dy >= self.height {
            return None;
        }
        let index = dy as usize * self.width as usize + dx as usize;
        self.tiles.get(index).copied().flatten()
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Biome>]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }

    /// Tile count per biome. Failed tiles are not counted.
    #[must_use]
    pub fn histogram(&self) -> BTreeMap<Biome, usize> {
        let mut counts = BTreeMap::new();
        for biome in self.tiles.iter().flatten() {
            *counts.entry(*biome).or_insert(0) += 1;
        }
        counts
    }

    /// Tiles that could not be evaluated, in sampling order.
    #[must_use]
    pub fn failures(&self) -> &[TileError] {
        &self.failures
    }

    /// True if every tile was classified.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl BiomeClassifier {
    /// Classifies `width x height` tiles starting at `(origin_col, origin_row)`.
    ///
    /// Failing tiles are logged with `warn!` and reported through
    /// [`BiomeRegion::failures`]. A tile whose coordinate would leave the
    /// `i64` range fails with `Overflow` at the saturated coordinate.
    #[must_use]
    pub fn sample_region(
        &self,
        origin_col: i64,
        origin_row: i64,
        width: u32,
        height: u32,
    ) -> BiomeRegion {
        let capacity = width as usize * height as usize;
        let mut tiles = Vec::with_capacity(capacity);
        let mut failures = Vec::new();

        for dy in 0..height {
            for dx in 0..width {
                let col = origin_col.checked_add(i64::from(dx));
                let row = origin_row.checked_add(i64::from(dy));

                let result = match (col, row) {
                    (Some(col), Some(row)) => self.biome(col, row).map_err(|source| TileError {
                        col,
                        row,
                        source,
                    }),
                    _ => Err(TileError {
                        col: origin_col.saturating_add(i64::from(dx)),
                        row: origin_row.saturating_add(i64::from(dy)),
                        source: FixedError::Overflow,
                    }),
                };

                match result {
                    Ok(biome) => tiles.push(Some(biome)),
                    Err(error) => {
                        tracing::warn!("Skipping tile: {}", error);
                        failures.push(error);
                        tiles.push(None);
                    }
                }
            }
        }

        tracing::debug!(
            "Sampled region at ({}, {}) {}x{}: {} failed tiles",
            origin_col,
            origin_row,
            width,
            height,
            failures.len()
        );

        BiomeRegion {
            origin_col,
            origin_row,
            width,
            height,
            tiles,
            failures,
        }
    }
}
