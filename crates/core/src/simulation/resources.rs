//! Firefighting resources and the suppression effort they provide
//!
//! Each deployed unit contributes a fixed number of effort points per period.
//! The total is what callers hand to [`SuppressionEngine::apply`].
//!
//! [`SuppressionEngine::apply`]: crate::simulation::SuppressionEngine::apply

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of deployable firefighting resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    HandCrews,
    Engines,
    AirTankers,
    Dozers,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::HandCrews,
        ResourceKind::Engines,
        ResourceKind::AirTankers,
        ResourceKind::Dozers,
    ];

    /// Suppression effort points one unit provides per period
    pub fn suppression_points(&self) -> u32 {
        match self {
            ResourceKind::HandCrews => 25,
            ResourceKind::Engines => 18,
            ResourceKind::AirTankers => 40,
            ResourceKind::Dozers => 30,
        }
    }

    /// Parse a resource name such as `"hand_crews"` or `"air-tankers"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "hand_crews" | "crews" => Some(ResourceKind::HandCrews),
            "engines" => Some(ResourceKind::Engines),
            "air_tankers" | "tankers" => Some(ResourceKind::AirTankers),
            "dozers" => Some(ResourceKind::Dozers),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::HandCrews => "hand crews",
            ResourceKind::Engines => "engines",
            ResourceKind::AirTankers => "air tankers",
            ResourceKind::Dozers => "dozers",
        };
        f.write_str(name)
    }
}

/// Units currently committed to an incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDeployment {
    pub hand_crews: u32,
    pub engines: u32,
    pub air_tankers: u32,
    pub dozers: u32,
}

impl Default for ResourceDeployment {
    /// Initial attack: one hand crew and one engine
    fn default() -> Self {
        Self {
            hand_crews: 1,
            engines: 1,
            air_tankers: 0,
            dozers: 0,
        }
    }
}

impl ResourceDeployment {
    /// No units deployed
    pub fn empty() -> Self {
        Self {
            hand_crews: 0,
            engines: 0,
            air_tankers: 0,
            dozers: 0,
        }
    }

    /// Units of `kind` on scene
    pub fn units(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::HandCrews => self.hand_crews,
            ResourceKind::Engines => self.engines,
            ResourceKind::AirTankers => self.air_tankers,
            ResourceKind::Dozers => self.dozers,
        }
    }

    /// Commit `count` more units of `kind`
    pub fn deploy(&mut self, kind: ResourceKind, count: u32) {
        let slot = match kind {
            ResourceKind::HandCrews => &mut self.hand_crews,
            ResourceKind::Engines => &mut self.engines,
            ResourceKind::AirTankers => &mut self.air_tankers,
            ResourceKind::Dozers => &mut self.dozers,
        };
        *slot = slot.saturating_add(count);
    }

    /// Total effort points per period across all deployed units
    pub fn suppression_points(&self) -> u32 {
        ResourceKind::ALL
            .iter()
            .map(|kind| self.units(*kind).saturating_mul(kind.suppression_points()))
            .fold(0u32, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deployment_points() {
        // 1 hand crew (25) + 1 engine (18)
        assert_eq!(ResourceDeployment::default().suppression_points(), 43);
        assert_eq!(ResourceDeployment::empty().suppression_points(), 0);
    }

    #[test]
    fn test_deploy_accumulates() {
        let mut deployment = ResourceDeployment::default();
        deployment.deploy(ResourceKind::AirTankers, 2);
        deployment.deploy(ResourceKind::Dozers, 1);
        deployment.deploy(ResourceKind::Engines, 2);
        assert_eq!(deployment.units(ResourceKind::AirTankers), 2);
        assert_eq!(deployment.units(ResourceKind::Engines), 3);
        // 25 + 3 * 18 + 2 * 40 + 30
        assert_eq!(deployment.suppression_points(), 189);
    }

    #[test]
    fn test_points_saturate() {
        let mut deployment = ResourceDeployment::empty();
        deployment.deploy(ResourceKind::AirTankers, u32::MAX);
        deployment.deploy(ResourceKind::AirTankers, 5);
        assert_eq!(deployment.units(ResourceKind::AirTankers), u32::MAX);
        assert_eq!(deployment.suppression_points(), u32::MAX);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ResourceKind::from_name("hand_crews"), Some(ResourceKind::HandCrews));
        assert_eq!(ResourceKind::from_name("Air-Tankers"), Some(ResourceKind::AirTankers));
        assert_eq!(ResourceKind::from_name("dozers"), Some(ResourceKind::Dozers));
        assert_eq!(ResourceKind::from_name("helicopters"), None);
    }
}
