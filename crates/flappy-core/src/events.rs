//! Events emitted by the simulation for presentation and logging.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new pipe pair entered at the right edge.
    PipeSpawned {
        spawn_tick: u64,
        top_height: f64,
        bottom_height: f64,
    },
    /// The bird passed the center of a pipe pair.
    PipeCleared { spawn_tick: u64, score: u32 },
    /// The engine entered the terminal phase.
    GameOver { tick: u64, score: u32 },
}
