//! Terrain classification and the per-terrain fire behaviour tables
//!
//! Terrain is assigned once per cell when a grid is built and never changes. It
//! drives three things:
//! - the fuel load sampled for the cell
//! - how readily fire spreads *into* the cell
//! - how hard the cell is to contain once it burns

use crate::error::ConfigurationError;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Terrain category of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    /// Timbered land, the most common cover
    Forest,
    /// Open grassland with fine, fast-burning fuels
    Grass,
    /// Built-up land; each cell holds structures at risk
    Urban,
    /// Exposed high ground, fire runs quickly uphill
    Ridge,
    /// Low sheltered ground, slower spread and good access
    Valley,
}

impl TerrainType {
    /// All terrain types in table order
    pub const ALL: [TerrainType; 5] = [
        TerrainType::Forest,
        TerrainType::Grass,
        TerrainType::Urban,
        TerrainType::Ridge,
        TerrainType::Valley,
    ];

    /// Inclusive fuel load range sampled at grid construction
    pub fn fuel_range(&self) -> RangeInclusive<u32> {
        match self {
            TerrainType::Grass => 1..=3,
            TerrainType::Forest => 4..=8,
            TerrainType::Urban => 6..=10,
            TerrainType::Ridge => 2..=5,
            TerrainType::Valley => 3..=6,
        }
    }

    /// Draw a fuel load for a freshly created cell of this terrain
    pub fn sample_fuel_load(&self, rng: &mut impl Rng) -> u32 {
        rng.random_range(self.fuel_range())
    }

    /// Multiplier applied to the spread probability when this terrain is the target
    pub fn spread_multiplier(&self) -> f64 {
        match self {
            TerrainType::Grass => 1.5,
            TerrainType::Forest => 1.0,
            TerrainType::Urban => 0.8,
            TerrainType::Ridge => 1.2,
            TerrainType::Valley => 0.7,
        }
    }

    /// Difficulty factor applied to the containment probability of a burning cell
    pub fn suppression_factor(&self) -> f64 {
        match self {
            TerrainType::Urban => 0.6,
            TerrainType::Valley => 1.3,
            TerrainType::Ridge => 0.8,
            TerrainType::Forest | TerrainType::Grass => 1.0,
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerrainType::Forest => "forest",
            TerrainType::Grass => "grass",
            TerrainType::Urban => "urban",
            TerrainType::Ridge => "ridge",
            TerrainType::Valley => "valley",
        };
        f.write_str(name)
    }
}

/// Standard landscape mix in percent: 40% forest, 30% grass, 10% each of the rest
pub const STANDARD_TERRAIN_WEIGHTS: [(TerrainType, u32); 5] = [
    (TerrainType::Forest, 40),
    (TerrainType::Grass, 30),
    (TerrainType::Urban, 10),
    (TerrainType::Ridge, 10),
    (TerrainType::Valley, 10),
];

/// Weighted sampler over terrain types.
///
/// Built fresh from a weight table whenever a grid needs one; there is no shared
/// global table.
#[derive(Debug, Clone)]
pub struct TerrainDistribution {
    terrains: Vec<TerrainType>,
    index: WeightedIndex<u32>,
}

impl TerrainDistribution {
    /// Build a sampler from `(terrain, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTerrainWeights`] if the table is empty
    /// or every weight is zero.
    pub fn from_weights(weights: &[(TerrainType, u32)]) -> Result<Self, ConfigurationError> {
        let index = WeightedIndex::new(weights.iter().map(|(_, w)| *w)).map_err(|e| {
            ConfigurationError::InvalidTerrainWeights {
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            terrains: weights.iter().map(|(t, _)| *t).collect(),
            index,
        })
    }

    /// Sampler for [`STANDARD_TERRAIN_WEIGHTS`].
    ///
    /// # Errors
    ///
    /// Never fails for the built-in table; the `Result` mirrors [`Self::from_weights`].
    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::from_weights(&STANDARD_TERRAIN_WEIGHTS)
    }

    /// Draw one terrain type
    pub fn sample(&self, rng: &mut impl Rng) -> TerrainType {
        self.terrains[self.index.sample(rng)]
    }
}
