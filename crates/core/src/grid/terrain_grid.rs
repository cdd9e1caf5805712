//! Square terrain grid owning every cell of an incident
//!
//! The grid is created once per incident. Terrain and fuel are sampled at
//! construction and never change afterwards; only fire state evolves, through
//! ignition, spread, aging and suppression.

use crate::core_types::{FireState, TerrainDistribution, TerrainType, WeatherState};
use crate::error::ConfigurationError;
use crate::grid::Cell;
use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

/// Largest accepted grid side length
pub const MAX_GRID_SIZE: usize = 1024;

/// Area represented by one cell
pub const ACRES_PER_CELL: u32 = 10;

/// Offsets of the 8-neighbourhood, row by row from the top-left
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Strength of the initial ignition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IgnitionIntensity {
    /// Seed cell plus 1 neighbour
    Low,
    /// Seed cell plus 2 neighbours
    #[default]
    Moderate,
    /// Seed cell plus 3 neighbours
    High,
}

impl IgnitionIntensity {
    /// Neighbours ignited alongside the seed cell
    pub fn additional_cells(&self) -> usize {
        match self {
            IgnitionIntensity::Low => 1,
            IgnitionIntensity::Moderate => 2,
            IgnitionIntensity::High => 3,
        }
    }
}

/// An in-bounds neighbour of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Column offset from the origin cell
    pub dx: i32,
    /// Row offset from the origin cell
    pub dy: i32,
    /// Neighbour column
    pub x: usize,
    /// Neighbour row
    pub y: usize,
}

/// Fire simulation grid of `size × size` cells
///
/// Deserialization re-checks the size and the cell layout, so a stored grid obeys
/// the same invariants as a freshly built one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TerrainGridRepr")]
pub struct TerrainGrid {
    /// Row-major cells, `cells[y * size + x]`
    pub(crate) cells: Vec<Cell>,
    size: usize,
    pub(crate) weather: WeatherState,
    pub(crate) operational_period: u32,
    start_time: DateTime<Utc>,
}

/// Unchecked wire form of [`TerrainGrid`]
#[derive(Deserialize)]
struct TerrainGridRepr {
    cells: Vec<Cell>,
    size: usize,
    weather: WeatherState,
    operational_period: u32,
    start_time: DateTime<Utc>,
}

impl TryFrom<TerrainGridRepr> for TerrainGrid {
    type Error = ConfigurationError;

    fn try_from(raw: TerrainGridRepr) -> Result<Self, Self::Error> {
        TerrainGrid::validate_size(raw.size)?;

        let expected = raw.size * raw.size;
        if raw.cells.len() != expected {
            return Err(ConfigurationError::InvalidGridLayout {
                message: format!(
                    "expected {expected} cells for size {}, found {}",
                    raw.size,
                    raw.cells.len()
                ),
            });
        }

        for (i, cell) in raw.cells.iter().enumerate() {
            let slot = (i % raw.size, i / raw.size);
            if cell.position() != slot {
                return Err(ConfigurationError::InvalidGridLayout {
                    message: format!("cell {i} claims position {:?}, expected {slot:?}", cell.position()),
                });
            }
        }

        Ok(TerrainGrid {
            cells: raw.cells,
            size: raw.size,
            weather: raw.weather,
            operational_period: raw.operational_period,
            start_time: raw.start_time,
        })
    }
}

impl TerrainGrid {
    /// Create a grid with the standard terrain mix, starting the incident clock now.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` is zero or exceeds [`MAX_GRID_SIZE`].
    pub fn new(size: usize, rng: &mut impl Rng) -> Result<Self, ConfigurationError> {
        Self::new_at(size, rng, Utc::now())
    }

    /// Create a grid with the standard terrain mix and an explicit incident start time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` is zero or exceeds [`MAX_GRID_SIZE`].
    pub fn new_at(
        size: usize,
        rng: &mut impl Rng,
        start_time: DateTime<Utc>,
    ) -> Result<Self, ConfigurationError> {
        Self::validate_size(size)?;
        let distribution = TerrainDistribution::standard()?;
        Ok(Self::build(size, rng, start_time, |_, _, rng| {
            distribution.sample(rng)
        }))
    }

    /// Create a grid whose terrain is chosen by `terrain_at(x, y)`.
    ///
    /// Fuel loads are still sampled per cell from the terrain's range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `size` is zero or exceeds [`MAX_GRID_SIZE`].
    pub fn with_terrain(
        size: usize,
        rng: &mut impl Rng,
        mut terrain_at: impl FnMut(usize, usize) -> TerrainType,
    ) -> Result<Self, ConfigurationError> {
        Self::validate_size(size)?;
        Ok(Self::build(size, rng, Utc::now(), |x, y, _| terrain_at(x, y)))
    }

    fn validate_size(size: usize) -> Result<(), ConfigurationError> {
        if size == 0 {
            return Err(ConfigurationError::NonPositiveGridSize { size });
        }
        if size > MAX_GRID_SIZE {
            return Err(ConfigurationError::GridTooLarge {
                size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }

    fn build<R: Rng>(
        size: usize,
        rng: &mut R,
        start_time: DateTime<Utc>,
        mut terrain_at: impl FnMut(usize, usize, &mut R) -> TerrainType,
    ) -> Self {
        // Weather is drawn before the cells so a seed reproduces both
        let weather = WeatherState::new_random(rng);

        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let terrain = terrain_at(x, y, rng);
                cells.push(Cell::new(terrain, x, y, rng));
            }
        }

        info!(
            "Created {}x{} terrain grid ({} acres), wind {} {} mph",
            size,
            size,
            size * size * ACRES_PER_CELL as usize,
            weather.wind_direction(),
            weather.wind_speed()
        );

        TerrainGrid {
            cells,
            size,
            weather,
            operational_period: 1,
            start_time,
        }
    }

    /// Start the incident now. See [`Self::ignite_at`].
    pub fn ignite(&mut self, intensity: IgnitionIntensity, rng: &mut impl Rng) {
        self.ignite_at(intensity, rng, Utc::now());
    }

    /// Start the incident at a random interior cell plus 1-3 distinct neighbours.
    ///
    /// The seed is never on the border, so all 8 neighbours exist. Grids smaller
    /// than 3 have no interior; there the seed may be any cell and neighbours are
    /// clipped to the grid. Cells that are already alight are skipped.
    pub fn ignite_at(&mut self, intensity: IgnitionIntensity, rng: &mut impl Rng, now: DateTime<Utc>) {
        let (lo, hi) = if self.size >= 3 {
            (1, self.size - 1)
        } else {
            (0, self.size)
        };
        let x = rng.random_range(lo..hi);
        let y = rng.random_range(lo..hi);
        self.ignite_cell_at(x, y, now);

        let candidates: Vec<(usize, usize)> = self.neighbors(x, y).map(|n| (n.x, n.y)).collect();
        for &(nx, ny) in candidates.choose_multiple(rng, intensity.additional_cells()) {
            self.ignite_cell_at(nx, ny, now);
        }

        info!(
            "Ignited {:?} fire at ({}, {}), {} cells burning",
            intensity,
            x,
            y,
            self.count(FireState::Burning)
        );
    }

    /// Ignite a single cell now. See [`Self::ignite_cell_at`].
    pub fn ignite_cell(&mut self, x: usize, y: usize) -> bool {
        self.ignite_cell_at(x, y, Utc::now())
    }

    /// Ignite the cell at `(x, y)`.
    ///
    /// Returns `true` if the cell changed from `Empty` to `Burning`; out-of-bounds
    /// coordinates and non-empty cells are silently skipped.
    pub fn ignite_cell_at(&mut self, x: usize, y: usize, now: DateTime<Utc>) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let idx = self.index(x, y);
        let ignited = self.cells[idx].ignite(now);
        if ignited {
            trace!("Cell ({}, {}) ignited", x, y);
        }
        ignited
    }

    /// In-bounds 8-neighbours of `(x, y)`
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Neighbor> + '_ {
        let size = self.size as i64;
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let nx = x as i64 + i64::from(dx);
            let ny = y as i64 + i64::from(dy);
            if (0..size).contains(&nx) && (0..size).contains(&ny) {
                Some(Neighbor {
                    dx,
                    dy,
                    x: nx as usize,
                    y: ny as usize,
                })
            } else {
                None
            }
        })
    }

    /// Whether any 8-neighbour of `(x, y)` is burning
    pub fn has_burning_neighbor(&self, x: usize, y: usize) -> bool {
        self.neighbors(x, y)
            .any(|n| self.cells[self.index(n.x, n.y)].state == FireState::Burning)
    }

    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Cell at `(x, y)`, or `None` when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.size && y < self.size {
            self.cells.get(self.index(x, y))
        } else {
            None
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of cells in `state`
    pub fn count(&self, state: FireState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Coordinates of every burning cell in row-major order
    pub fn burning_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|c| c.state == FireState::Burning)
            .map(Cell::position)
            .collect()
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the grid
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Area covered by the whole grid
    pub fn total_acres(&self) -> u32 {
        self.total_cells() as u32 * ACRES_PER_CELL
    }

    /// Weather for the current operational period
    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    /// Replace the weather without advancing the period
    pub fn set_weather(&mut self, weather: WeatherState) {
        self.weather = weather;
    }

    /// Current operational period, starting at 1
    pub fn operational_period(&self) -> u32 {
        self.operational_period
    }

    /// Instant the incident began
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}
