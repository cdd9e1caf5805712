//! Fire simulation engines operating on a [`TerrainGrid`](crate::grid::TerrainGrid)
//!
//! - [`SpreadEngine`]: one probabilistic generation of fire spread plus burnout
//! - [`SuppressionEngine`]: distributes suppression effort over burning cells
//! - [`PeriodController`]: weather reset and multi-step spread per operational period
//! - [`StatisticsReporter`]: read-only size, containment and threat metrics
//!
//! All engines are stateless. Randomness is always passed in by the caller, so a
//! seeded generator reproduces an incident exactly.

pub mod difficulty;
pub mod outcome;
pub mod period;
pub mod resources;
pub mod spread;
pub mod statistics;
pub mod suppression;

pub use difficulty::{Difficulty, ScenarioConfig, DEFAULT_CRITICAL_FAILURE_ACRES};
pub use outcome::IncidentOutcome;
pub use period::{PeriodController, SPREAD_STEPS_PER_PERIOD};
pub use resources::{ResourceDeployment, ResourceKind};
pub use spread::{SpreadEngine, BASE_SPREAD_PROBABILITY, MAX_SPREAD_PROBABILITY};
pub use statistics::{Stats, StatisticsReporter, Threat, ThreatLevel, STRUCTURES_PER_URBAN_CELL};
pub use suppression::{
    SuppressionEngine, CONTAINMENT_PER_EFFORT_POINT, MAX_CONTAINMENT_PROBABILITY,
};
