//! Read-only incident statistics and structure threat assessment
//!
//! Everything here is derived from grid state on demand and never cached.

use crate::core_types::{DangerRating, FireState, TerrainType, WeatherState};
use crate::grid::{TerrainGrid, ACRES_PER_CELL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Structures assumed to stand on each urban cell
pub const STRUCTURES_PER_URBAN_CELL: u32 = 25;

/// Aggregate fire statistics at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// `10 × (burning + burned + contained)`
    pub fire_size_acres: u32,
    /// `contained / max(1, burning + contained) × 100`, floored
    pub containment_percent: u32,
    /// Cells currently burning
    pub active_cells: usize,
    /// Cells burned out naturally
    pub burned_cells: usize,
    /// Cells contained by suppression
    pub contained_cells: usize,
    /// Cells in the grid
    pub total_cells: usize,
    /// Current period's weather
    pub weather: WeatherState,
    /// Danger rating of `weather`
    pub fire_danger: DangerRating,
    /// Current operational period
    pub operational_period: u32,
    /// Time since the incident started, zero if the clock reads earlier than the start
    pub incident_duration: Duration,
}

impl Stats {
    /// Incident duration as `H:MM:SS`
    pub fn incident_duration_display(&self) -> String {
        let secs = self.incident_duration.as_secs();
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

/// Qualitative risk to structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Moderate => "MODERATE",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Extreme => "EXTREME",
        };
        f.write_str(name)
    }
}

/// Threat to structures on urban cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct Threat {
    pub threat_level: ThreatLevel,
    /// Structures on every urban cell
    pub total_structures: u32,
    /// Structures on urban cells that are burning or next to fire
    pub threatened_structures: u32,
    pub evacuation_recommended: bool,
}

/// Derives statistics from a grid without touching it
pub struct StatisticsReporter;

impl StatisticsReporter {
    /// Statistics as of the current wall-clock time
    pub fn statistics(grid: &TerrainGrid) -> Stats {
        Self::statistics_at(grid, Utc::now())
    }

    /// Statistics as of `now`. Calling twice with the same `now` gives identical results.
    pub fn statistics_at(grid: &TerrainGrid, now: DateTime<Utc>) -> Stats {
        let (mut burning, mut burned, mut contained) = (0usize, 0usize, 0usize);
        for cell in grid.cells() {
            match cell.state() {
                FireState::Burning => burning += 1,
                FireState::Burned => burned += 1,
                FireState::Contained => contained += 1,
                FireState::Empty => {}
            }
        }

        let affected = burning + burned + contained;
        let fighting = (burning + contained).max(1);

        Stats {
            fire_size_acres: affected as u32 * ACRES_PER_CELL,
            // Burned-out cells are neither still fighting nor contained
            containment_percent: (contained * 100 / fighting) as u32,
            active_cells: burning,
            burned_cells: burned,
            contained_cells: contained,
            total_cells: grid.total_cells(),
            weather: *grid.weather(),
            fire_danger: grid.weather().danger_rating(),
            operational_period: grid.operational_period(),
            incident_duration: (now - grid.start_time()).to_std().unwrap_or_default(),
        }
    }

    /// Count urban structures on or next to burning cells and rate the threat.
    pub fn threat_assessment(grid: &TerrainGrid) -> Threat {
        let mut urban_cells = 0u32;
        let mut threatened_cells = 0u32;

        for cell in grid.cells() {
            if cell.terrain() != TerrainType::Urban {
                continue;
            }
            urban_cells += 1;
            let (x, y) = cell.position();
            if cell.state() == FireState::Burning || grid.has_burning_neighbor(x, y) {
                threatened_cells += 1;
            }
        }

        let threat_level = if threatened_cells == 0 {
            ThreatLevel::Low
        } else {
            let ratio = f64::from(threatened_cells) / f64::from(urban_cells.max(1));
            if ratio > 0.5 {
                ThreatLevel::Extreme
            } else if ratio > 0.25 {
                ThreatLevel::High
            } else {
                ThreatLevel::Moderate
            }
        };

        Threat {
            threat_level,
            total_structures: urban_cells * STRUCTURES_PER_URBAN_CELL,
            threatened_structures: threatened_cells * STRUCTURES_PER_URBAN_CELL,
            evacuation_recommended: threatened_cells > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::IgnitionIntensity;
    use chrono::TimeDelta;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unignited_grid_statistics_are_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = TerrainGrid::new(8, &mut rng).unwrap();
        let stats = StatisticsReporter::statistics(&grid);
        assert_eq!(stats.total_cells, 64);
        assert_eq!(stats.fire_size_acres, 0);
        assert_eq!(stats.containment_percent, 0);
        assert_eq!(stats.active_cells, 0);
        assert_eq!(stats.operational_period, 1);
    }

    #[test]
    fn test_containment_excludes_burned_cells() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = TerrainGrid::new(5, &mut rng).unwrap();
        let now = grid.start_time();
        for x in 0..5 {
            grid.ignite_cell_at(x, 0, now);
        }
        // 2 contained, 1 burned, 2 burning
        assert!(grid.cells[0].contain(now));
        assert!(grid.cells[1].contain(now));
        assert!(grid.cells[2].burn_out());

        let stats = StatisticsReporter::statistics_at(&grid, now);
        assert_eq!(stats.active_cells, 2);
        assert_eq!(stats.burned_cells, 1);
        assert_eq!(stats.contained_cells, 2);
        assert_eq!(stats.fire_size_acres, 50);
        // 2 / (2 + 2) = 50%
        assert_eq!(stats.containment_percent, 50);
    }

    #[test]
    fn test_containment_percent_floors() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = TerrainGrid::new(5, &mut rng).unwrap();
        let now = grid.start_time();
        for x in 0..3 {
            grid.ignite_cell_at(x, 0, now);
        }
        assert!(grid.cells[0].contain(now));
        // 1 / 3 = 33.3%
        assert_eq!(StatisticsReporter::statistics_at(&grid, now).containment_percent, 33);
        assert!(grid.cells[1].contain(now));
        // 2 / 3 = 66.6%
        assert_eq!(StatisticsReporter::statistics_at(&grid, now).containment_percent, 66);
    }

    #[test]
    fn test_statistics_idempotent() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut grid = TerrainGrid::new(8, &mut rng).unwrap();
        grid.ignite(IgnitionIntensity::High, &mut rng);
        let now = Utc::now();
        assert_eq!(
            StatisticsReporter::statistics_at(&grid, now),
            StatisticsReporter::statistics_at(&grid, now)
        );
    }

    #[test]
    fn test_incident_duration() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = TerrainGrid::new(4, &mut rng).unwrap();
        let later = grid.start_time() + TimeDelta::seconds(3 * 3600 + 5 * 60 + 9);
        let stats = StatisticsReporter::statistics_at(&grid, later);
        assert_eq!(stats.incident_duration, Duration::from_secs(11109));
        assert_eq!(stats.incident_duration_display(), "3:05:09");

        // Clock earlier than start clamps to zero
        let earlier = grid.start_time() - TimeDelta::seconds(10);
        let stats = StatisticsReporter::statistics_at(&grid, earlier);
        assert_eq!(stats.incident_duration, Duration::ZERO);
    }

    #[test]
    fn test_threat_all_urban_single_burning_cell() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut grid = TerrainGrid::with_terrain(2, &mut rng, |_, _| TerrainType::Urban).unwrap();
        grid.ignite_cell(0, 0);

        // Every cell of a 2x2 grid is on or next to the fire: 4/4 > 0.5
        let threat = StatisticsReporter::threat_assessment(&grid);
        assert_eq!(threat.threat_level, ThreatLevel::Extreme);
        assert_eq!(threat.total_structures, 100);
        assert_eq!(threat.threatened_structures, 100);
        assert!(threat.evacuation_recommended);
    }

    #[test]
    fn test_threat_levels_scale_with_ratio() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = TerrainGrid::with_terrain(5, &mut rng, |_, _| TerrainType::Urban).unwrap();
        // Corner fire: itself + 3 neighbours = 4 of 25 urban cells (16%)
        grid.ignite_cell(0, 0);
        let threat = StatisticsReporter::threat_assessment(&grid);
        assert_eq!(threat.threat_level, ThreatLevel::Moderate);
        assert_eq!(threat.threatened_structures, 4 * 25);

        // Centre fire adds a 3x3 block sharing (1, 1): 12 of 25 (48%)
        grid.ignite_cell(2, 2);
        let threat = StatisticsReporter::threat_assessment(&grid);
        assert_eq!(threat.threat_level, ThreatLevel::High);
        assert_eq!(threat.threatened_structures, 12 * 25);

        // Opposite corner adds (4, 3), (3, 4) and (4, 4): 15 of 25 (60%)
        grid.ignite_cell(4, 4);
        let threat = StatisticsReporter::threat_assessment(&grid);
        assert_eq!(threat.threat_level, ThreatLevel::Extreme);
        assert_eq!(threat.threatened_structures, 15 * 25);
        assert_eq!(threat.total_structures, 25 * 25);

        // Exactly half is not above 0.5: both top corners of a 4x4 urban grid
        // threaten 4 + 4 = 8 of 16 cells
        let mut half = TerrainGrid::with_terrain(4, &mut rng, |_, _| TerrainType::Urban).unwrap();
        half.ignite_cell(0, 0);
        half.ignite_cell(3, 0);
        let threat = StatisticsReporter::threat_assessment(&half);
        assert_eq!(threat.threatened_structures, 8 * 25);
        assert_eq!(threat.threat_level, ThreatLevel::High);
    }

    #[test]
    fn test_threat_high_band() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut grid = TerrainGrid::with_terrain(6, &mut rng, |_, _| TerrainType::Urban).unwrap();
        // Interior fire threatens a 3x3 block: 9 of 36 = 25%, not above 0.25
        grid.ignite_cell(2, 2);
        assert_eq!(
            StatisticsReporter::threat_assessment(&grid).threat_level,
            ThreatLevel::Moderate
        );
        // Adjacent second fire widens the block to 3x4 = 12 of 36 (33%)
        grid.ignite_cell(3, 2);
        assert_eq!(
            StatisticsReporter::threat_assessment(&grid).threat_level,
            ThreatLevel::High
        );
    }

    #[test]
    fn test_no_urban_cells_is_low_threat() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = TerrainGrid::with_terrain(4, &mut rng, |_, _| TerrainType::Grass).unwrap();
        grid.ignite_cell(1, 1);
        let threat = StatisticsReporter::threat_assessment(&grid);
        assert_eq!(threat.threat_level, ThreatLevel::Low);
        assert_eq!(threat.total_structures, 0);
        assert!(!threat.evacuation_recommended);
    }

    #[test]
    fn test_contained_urban_neighbour_not_a_threat() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut grid = TerrainGrid::with_terrain(3, &mut rng, |_, _| TerrainType::Urban).unwrap();
        let now = grid.start_time();
        grid.ignite_cell_at(1, 1, now);
        let idx = grid.index(1, 1);
        assert!(grid.cells[idx].contain(now));
        let threat = StatisticsReporter::threat_assessment(&grid);
        assert_eq!(threat.threatened_structures, 0);
        assert_eq!(threat.threat_level, ThreatLevel::Low);
    }
}
