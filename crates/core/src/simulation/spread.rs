//! Probabilistic fire spread between neighbouring cells
//!
//! One call to [`SpreadEngine::step`] is one generation of the automaton:
//! 1. every burning cell tests each of its empty 8-neighbours against
//!    [`SpreadEngine::spread_probability`] and buffers the hits
//! 2. all buffered cells are ignited together
//! 3. burning cells whose wall-clock burn time exceeds their fuel allowance burn out
//!
//! The buffer keeps the step order-independent: a cell ignited this step cannot
//! spread further until the next one. A target next to several burning cells is
//! tested once per burning neighbour, so its chance of catching compounds.

use crate::core_types::{FireState, WeatherState};
use crate::grid::{Cell, TerrainGrid};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, trace};

/// Chance of spread before terrain, wind, fuel and weather factors
pub const BASE_SPREAD_PROBABILITY: f64 = 0.3;

/// Spread is never certain
pub const MAX_SPREAD_PROBABILITY: f64 = 0.9;

/// Multiplier for spreading directly into the wind
const UPWIND_FACTOR: f64 = 0.5;

/// Wind speed (mph) at which downwind spread doubles
const WIND_NORMALIZATION_MPH: f64 = 25.0;

/// Fuel load giving a neutral fuel factor
const REFERENCE_FUEL_LOAD: f64 = 5.0;

/// Cellular-automaton spread model
pub struct SpreadEngine;

impl SpreadEngine {
    /// Probability that fire crosses from the burning `_source` into `target`.
    ///
    /// `(dx, dy)` is the offset from the source to the target. Only the target's
    /// terrain and fuel enter the odds; the source's terrain and fuel have no effect.
    pub fn spread_probability(
        _source: &Cell,
        target: &Cell,
        dx: i32,
        dy: i32,
        weather: &WeatherState,
    ) -> f64 {
        let mut p = BASE_SPREAD_PROBABILITY * target.terrain().spread_multiplier();

        let (wind_dx, wind_dy) = weather.wind_direction().to_vector();
        if (dx, dy) == (wind_dx, wind_dy) {
            p *= 1.0 + f64::from(weather.wind_speed()) / WIND_NORMALIZATION_MPH;
        } else if (dx, dy) == (-wind_dx, -wind_dy) {
            p *= UPWIND_FACTOR;
        }

        p *= f64::from(target.fuel_load()) / REFERENCE_FUEL_LOAD;
        p *= f64::from(weather.temperature()) / 100.0;
        p *= 1.0 - f64::from(weather.humidity()) / 100.0;

        p.min(MAX_SPREAD_PROBABILITY)
    }

    /// Advance the automaton one generation using the current wall-clock time.
    pub fn step(grid: &mut TerrainGrid, rng: &mut impl Rng) {
        Self::step_at(grid, rng, Utc::now());
    }

    /// Advance the automaton one generation as of `now`.
    pub fn step_at(grid: &mut TerrainGrid, rng: &mut impl Rng, now: DateTime<Utc>) {
        let size = grid.size();
        let mut to_ignite: Vec<(usize, usize)> = Vec::new();

        for y in 0..size {
            for x in 0..size {
                let source = &grid.cells[grid.index(x, y)];
                if source.state != FireState::Burning {
                    continue;
                }
                for n in grid.neighbors(x, y) {
                    let target = &grid.cells[grid.index(n.x, n.y)];
                    if target.state != FireState::Empty {
                        continue;
                    }
                    let p = Self::spread_probability(source, target, n.dx, n.dy, &grid.weather);
                    if rng.random::<f64>() < p {
                        trace!("Spread ({}, {}) -> ({}, {}) at p={:.3}", x, y, n.x, n.y, p);
                        to_ignite.push((n.x, n.y));
                    }
                }
            }
        }

        // Duplicates are harmless: igniting a burning cell is a no-op
        let mut ignited = 0;
        for (x, y) in to_ignite {
            if grid.ignite_cell_at(x, y, now) {
                ignited += 1;
            }
        }

        let burned_out = Self::age_fires_at(grid, now);

        debug!(
            "Spread step: {} cells ignited, {} burned out, {} burning",
            ignited,
            burned_out,
            grid.count(FireState::Burning)
        );
    }

    /// Burn out every burning cell that has exceeded its burnout duration as of `now`.
    ///
    /// Aging compares real elapsed time, not step counts, so repeated steps in
    /// quick succession leave cells burning. Returns the number of cells burned out.
    pub fn age_fires_at(grid: &mut TerrainGrid, now: DateTime<Utc>) -> usize {
        let mut burned_out = 0;
        for cell in &mut grid.cells {
            if cell.is_burned_out_at(now) && cell.burn_out() {
                burned_out += 1;
            }
        }
        burned_out
    }
}
