//! Difficulty presets and incident scenario configuration
//!
//! A difficulty picks how big the incident area is and how hard the fire starts.
//! Harder scenarios use a larger grid and a stronger initial ignition.

use crate::error::ConfigurationError;
use crate::grid::{IgnitionIntensity, TerrainGrid, MAX_GRID_SIZE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Fire size at which an incident is considered lost
pub const DEFAULT_CRITICAL_FAILURE_ACRES: u32 = 200;

/// Difficulty mode for gameplay scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Small 6x6 area, low-intensity start
    Easy,
    /// 7x7 area, moderate start
    #[default]
    Moderate,
    /// 8x8 area, high-intensity start
    Hard,
}

impl Difficulty {
    /// Grid side length for this difficulty
    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Moderate => 7,
            Difficulty::Hard => 8,
        }
    }

    /// Ignition intensity for this difficulty
    pub fn intensity(&self) -> IgnitionIntensity {
        match self {
            Difficulty::Easy => IgnitionIntensity::Low,
            Difficulty::Moderate => IgnitionIntensity::Moderate,
            Difficulty::Hard => IgnitionIntensity::High,
        }
    }

    /// Scenario configuration for this difficulty
    pub fn scenario(&self) -> ScenarioConfig {
        ScenarioConfig {
            grid_size: self.grid_size(),
            intensity: self.intensity(),
            critical_failure_acres: DEFAULT_CRITICAL_FAILURE_ACRES,
        }
    }
}

/// Parameters for one incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Grid side length in cells
    pub grid_size: usize,
    /// Strength of the initial ignition
    pub intensity: IgnitionIntensity,
    /// Fire size at which the incident escalates beyond control
    pub critical_failure_acres: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Difficulty::default().scenario()
    }
}

impl ScenarioConfig {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for a zero or oversized grid, or a zero
    /// failure threshold.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.grid_size == 0 {
            return Err(ConfigurationError::NonPositiveGridSize {
                size: self.grid_size,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigurationError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.critical_failure_acres == 0 {
            return Err(ConfigurationError::invalid_scenario(
                "critical_failure_acres",
                "must be positive, got 0",
            ));
        }
        Ok(())
    }

    /// Validate, build the grid and ignite it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if [`Self::validate`] fails.
    pub fn start_incident(&self, rng: &mut impl Rng) -> Result<TerrainGrid, ConfigurationError> {
        self.validate()?;
        let mut grid = TerrainGrid::new(self.grid_size, rng)?;
        grid.ignite(self.intensity, rng);
        info!(
            "Incident started: {}x{} grid, {:?} ignition, failure at {} acres",
            self.grid_size, self.grid_size, self.intensity, self.critical_failure_acres
        );
        Ok(grid)
    }
}
