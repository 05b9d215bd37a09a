//! Player commands sent from an input adapter to the simulation.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Give the bird an instantaneous upward velocity.
    Jump,
    /// Rebuild the initial game from the engine configuration.
    Reset,
}
