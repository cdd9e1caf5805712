//! Operational period control
//!
//! An operational period is one game turn: the weather is redrawn and the fire is
//! given [`SPREAD_STEPS_PER_PERIOD`] generations to grow. Suppression is never
//! applied here; callers schedule it before or after as their turn structure wants.

use crate::core_types::{FireState, WeatherState};
use crate::grid::TerrainGrid;
use crate::simulation::spread::SpreadEngine;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;

/// Spread generations run within one operational period
pub const SPREAD_STEPS_PER_PERIOD: usize = 3;

/// Period sequencing
pub struct PeriodController;

impl PeriodController {
    /// Advance one period using the current wall-clock time. See [`Self::advance_at`].
    pub fn advance(grid: &mut TerrainGrid, rng: &mut impl Rng) {
        Self::advance_at(grid, rng, Utc::now());
    }

    /// Move to the next period: bump the counter, replace the weather and run
    /// [`SPREAD_STEPS_PER_PERIOD`] spread steps.
    pub fn advance_at(grid: &mut TerrainGrid, rng: &mut impl Rng, now: DateTime<Utc>) {
        grid.operational_period += 1;
        grid.weather = WeatherState::new_random(rng);

        for _ in 0..SPREAD_STEPS_PER_PERIOD {
            SpreadEngine::step_at(grid, rng, now);
        }

        info!(
            "Operational period {} ({} danger, wind {} {} mph): {} burning, {} burned, {} contained",
            grid.operational_period,
            grid.weather.danger_rating(),
            grid.weather.wind_direction(),
            grid.weather.wind_speed(),
            grid.count(FireState::Burning),
            grid.count(FireState::Burned),
            grid.count(FireState::Contained)
        );
    }

    /// No cell is burning. Trivially true for a grid that was never ignited.
    pub fn is_contained(grid: &TerrainGrid) -> bool {
        grid.cells().iter().all(|c| c.state() != FireState::Burning)
    }
}
