//! Wildfire Simulation Core Library
//!
//! A grid-based, probabilistic cellular automaton for wildfire incidents. Fire
//! ignites on a square terrain grid, spreads between neighbouring cells under the
//! influence of terrain, fuel and weather, burns out over time or is contained by
//! suppression effort. Derived statistics (fire size, containment, threat to
//! structures) are computed on demand for the game layer that drives the engine.
//!
//! The engine is single-threaded and synchronous. Every probabilistic operation
//! takes the random generator as an argument, so seeded runs are reproducible:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wildfire_sim_core::{
//!     IgnitionIntensity, PeriodController, StatisticsReporter, SuppressionEngine, TerrainGrid,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut grid = TerrainGrid::new(8, &mut rng).unwrap();
//! grid.ignite(IgnitionIntensity::Moderate, &mut rng);
//!
//! SuppressionEngine::apply(&mut grid, 43, &mut rng);
//! PeriodController::advance(&mut grid, &mut rng);
//!
//! let stats = StatisticsReporter::statistics(&grid);
//! assert_eq!(stats.operational_period, 2);
//! assert!(stats.containment_percent <= 100);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Grid and engines
pub mod grid;
pub mod simulation;

// Re-export core types
pub use core_types::{
    DangerRating, FireState, ForecastReliability, TerrainDistribution, TerrainType, WeatherState,
    WindDirection,
};
pub use error::ConfigurationError;

// Re-export grid types
pub use grid::{Cell, IgnitionIntensity, TerrainGrid, ACRES_PER_CELL, MAX_GRID_SIZE};

// Re-export engines and reports
pub use simulation::{
    Difficulty, IncidentOutcome, PeriodController, ResourceDeployment, ResourceKind,
    ScenarioConfig, SpreadEngine, StatisticsReporter, Stats, SuppressionEngine, Threat,
    ThreatLevel,
};
