//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level engine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Gameplay advances every tick.
    #[default]
    Running,
    /// Game over. Absorbing until an explicit reset.
    Terminal,
}
