//! Distribution of suppression effort across the active fire
//!
//! A budget of effort points is split evenly over every burning cell. Each cell
//! then gets one containment roll whose odds grow with its share of the budget
//! and shrink with how hard its terrain is to work.

use crate::core_types::FireState;
use crate::grid::TerrainGrid;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, trace};

/// Containment chance contributed by each effort point assigned to a cell
pub const CONTAINMENT_PER_EFFORT_POINT: f64 = 0.1;

/// Ceiling on the base containment chance, before terrain difficulty
pub const MAX_CONTAINMENT_PROBABILITY: f64 = 0.8;

/// Suppression model
pub struct SuppressionEngine;

impl SuppressionEngine {
    /// Effort points each burning cell receives; never less than 1 while anything burns
    pub fn effort_per_cell(effort_points: u32, burning_cells: usize) -> u32 {
        if burning_cells == 0 {
            return 0;
        }
        (effort_points / burning_cells as u32).max(1)
    }

    /// Base containment chance for a cell receiving `per_cell` points
    pub fn base_containment_probability(per_cell: u32) -> f64 {
        (f64::from(per_cell) * CONTAINMENT_PER_EFFORT_POINT).min(MAX_CONTAINMENT_PROBABILITY)
    }

    /// Apply suppression now. See [`Self::apply_at`].
    pub fn apply(grid: &mut TerrainGrid, effort_points: u32, rng: &mut impl Rng) -> usize {
        Self::apply_at(grid, effort_points, rng, Utc::now())
    }

    /// Spread `effort_points` over all burning cells and roll containment for each.
    ///
    /// Zero effort still gives each burning cell the 1-point floor. With no fire
    /// burning nothing happens and no random numbers are drawn. Returns the number
    /// of cells contained.
    pub fn apply_at(
        grid: &mut TerrainGrid,
        effort_points: u32,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> usize {
        let burning = grid.burning_cells();
        if burning.is_empty() {
            return 0;
        }

        let per_cell = Self::effort_per_cell(effort_points, burning.len());
        let base = Self::base_containment_probability(per_cell);

        let mut contained = 0;
        for (x, y) in &burning {
            let idx = grid.index(*x, *y);
            let cell = &mut grid.cells[idx];
            let p = base * cell.terrain.suppression_factor();
            if rng.random::<f64>() < p && cell.contain(now) {
                trace!("Contained ({}, {}) at p={:.3}", x, y, p);
                contained += 1;
            }
        }

        debug!(
            "Suppression: {} points, {} per cell, {} of {} burning cells contained",
            effort_points,
            per_cell,
            contained,
            burning.len()
        );
        debug_assert_eq!(grid.count(FireState::Burning), burning.len() - contained);
        contained
    }
}
