//! Win/loss policy helper for the orchestration layer
//!
//! The engine never decides an incident on its own. This is the policy the game
//! applies between periods: a fire with nothing left burning is contained, one that
//! has grown to the failure threshold has escalated.

use crate::grid::TerrainGrid;
use crate::simulation::period::PeriodController;
use crate::simulation::statistics::StatisticsReporter;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// State of an incident after a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentOutcome {
    /// Fire still burning below the failure threshold
    Active,
    /// Nothing left burning
    Contained,
    /// Fire size reached the failure threshold
    Escalated,
}

impl IncidentOutcome {
    /// Decide the outcome of `grid` against `critical_failure_acres`.
    ///
    /// A grid that never burned is `Active`. Containment wins if both conditions hold.
    pub fn evaluate(grid: &TerrainGrid, critical_failure_acres: u32) -> Self {
        let stats = StatisticsReporter::statistics(grid);
        let outcome = if stats.fire_size_acres > 0 && PeriodController::is_contained(grid) {
            IncidentOutcome::Contained
        } else if stats.fire_size_acres >= critical_failure_acres {
            IncidentOutcome::Escalated
        } else {
            IncidentOutcome::Active
        };

        if outcome != IncidentOutcome::Active {
            info!(
                "Incident {} in period {} at {} acres ({}% contained)",
                outcome, stats.operational_period, stats.fire_size_acres, stats.containment_percent
            );
        }
        outcome
    }

    /// Incident is over, won or lost
    pub fn is_final(&self) -> bool {
        !matches!(self, IncidentOutcome::Active)
    }
}

impl fmt::Display for IncidentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncidentOutcome::Active => "active",
            IncidentOutcome::Contained => "contained",
            IncidentOutcome::Escalated => "escalated",
        };
        f.write_str(name)
    }
}
