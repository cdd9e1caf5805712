//! Per-cell fire state machine
//!
//! States only ever move forward: `Empty -> Burning -> {Burned | Contained}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fire state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FireState {
    /// Unburned fuel
    #[default]
    Empty,
    /// Actively burning
    Burning,
    /// Burned out naturally
    Burned,
    /// Extinguished by suppression
    Contained,
}

impl FireState {
    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: FireState) -> bool {
        matches!(
            (self, next),
            (FireState::Empty, FireState::Burning)
                | (FireState::Burning, FireState::Burned | FireState::Contained)
        )
    }

    /// Burned and Contained cells never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, FireState::Burned | FireState::Contained)
    }

    /// Cell has been touched by fire at some point
    pub fn is_affected(&self) -> bool {
        !matches!(self, FireState::Empty)
    }
}

impl fmt::Display for FireState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FireState::Empty => "empty",
            FireState::Burning => "burning",
            FireState::Burned => "burned",
            FireState::Contained => "contained",
        };
        f.write_str(name)
    }
}
