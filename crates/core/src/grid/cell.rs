//! A single 10-acre cell of the terrain grid

use crate::core_types::{FireState, TerrainType};
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hours of burning sustained by each unit of fuel load before natural burnout
pub const BURNOUT_HOURS_PER_FUEL: i64 = 2;

/// Terrain and fire state of one grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Terrain type, fixed at construction
    pub(crate) terrain: TerrainType,
    /// Current fire state
    pub(crate) state: FireState,
    /// Fuel load sampled from the terrain's range, fixed at construction
    pub(crate) fuel_load: u32,
    /// Equal to `fuel_load` while burning, 0 otherwise
    pub(crate) burn_intensity: u32,
    /// Wall-clock instant the cell caught fire
    pub(crate) ignition_tick: Option<DateTime<Utc>>,
    /// Wall-clock instant the cell was contained
    pub(crate) contained_tick: Option<DateTime<Utc>>,
    /// Column in the grid
    pub(crate) x: usize,
    /// Row in the grid
    pub(crate) y: usize,
}

impl Cell {
    /// Create an unburned cell, sampling its fuel load from the terrain's range
    pub fn new(terrain: TerrainType, x: usize, y: usize, rng: &mut impl Rng) -> Self {
        Cell {
            terrain,
            state: FireState::Empty,
            fuel_load: terrain.sample_fuel_load(rng),
            burn_intensity: 0,
            ignition_tick: None,
            contained_tick: None,
            x,
            y,
        }
    }

    /// Set the cell burning. Returns `false` (and changes nothing) unless it was `Empty`.
    pub(crate) fn ignite(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != FireState::Empty {
            return false;
        }
        self.state = FireState::Burning;
        self.ignition_tick = Some(now);
        self.burn_intensity = self.fuel_load;
        true
    }

    /// Natural burnout. Returns `false` unless the cell was `Burning`.
    pub(crate) fn burn_out(&mut self) -> bool {
        if self.state != FireState::Burning {
            return false;
        }
        self.state = FireState::Burned;
        self.burn_intensity = 0;
        true
    }

    /// Contained by suppression. Returns `false` unless the cell was `Burning`.
    pub(crate) fn contain(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != FireState::Burning {
            return false;
        }
        self.state = FireState::Contained;
        self.contained_tick = Some(now);
        self.burn_intensity = 0;
        true
    }

    /// How long this cell burns before it burns out on its own
    pub fn burnout_duration(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.fuel_load) * BURNOUT_HOURS_PER_FUEL)
    }

    /// Burning for strictly longer than [`Self::burnout_duration`] as of `now`
    pub fn is_burned_out_at(&self, now: DateTime<Utc>) -> bool {
        match (self.state, self.ignition_tick) {
            (FireState::Burning, Some(ignited)) => now - ignited > self.burnout_duration(),
            _ => false,
        }
    }

    // Public accessor methods

    pub fn terrain(&self) -> TerrainType {
        self.terrain
    }

    pub fn state(&self) -> FireState {
        self.state
    }

    pub fn fuel_load(&self) -> u32 {
        self.fuel_load
    }

    pub fn burn_intensity(&self) -> u32 {
        self.burn_intensity
    }

    pub fn ignition_tick(&self) -> Option<DateTime<Utc>> {
        self.ignition_tick
    }

    pub fn contained_tick(&self) -> Option<DateTime<Utc>> {
        self.contained_tick
    }

    /// Grid position `(x, y)`
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}
