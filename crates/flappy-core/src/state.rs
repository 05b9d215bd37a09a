//! Game state snapshot: the complete visible state after each tick.
//!
//! A `GameState` is a value. The engine never edits a committed snapshot;
//! every tick builds a new one from the previous, so a reader holding a
//! snapshot can never observe (or cause) a change to engine state.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::{Bird, PipePair};

/// Immutable snapshot of one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick_count: u64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub ground_height: f64,
    pub pipe_width: f64,
    pub pipe_vx: f64,
    /// Spawn order, which is also left-to-right order.
    pub pipe_pairs: Vec<PipePair>,
    pub bird: Bird,
    pub score: u32,
}

impl GameState {
    /// Tick 0: no pipes, bird resting at the center of the screen.
    pub fn initial(config: &GameConfig) -> Self {
        let screen_width = f64::from(config.screen_width);
        let screen_height = f64::from(config.screen_height);

        Self {
            tick_count: 0,
            screen_width,
            screen_height,
            ground_height: f64::from(config.ground_height),
            pipe_width: f64::from(config.pipe_width),
            pipe_vx: config.pipe_vx,
            pipe_pairs: Vec::new(),
            bird: Bird {
                x: screen_width / 2.0,
                y: screen_height / 2.0,
                width: config.bird_width,
                height: config.bird_height,
                vy: 0.0,
                ay: config.bird_ay,
            },
            score: 0,
        }
    }

    /// Y coordinate of the top of the ground strip.
    pub fn floor_y(&self) -> f64 {
        self.screen_height - self.ground_height
    }

    pub fn with_bird(&self, bird: Bird) -> Self {
        Self {
            bird,
            ..self.clone()
        }
    }

    pub fn with_pipe_pairs(self, pipe_pairs: Vec<PipePair>) -> Self {
        Self { pipe_pairs, ..self }
    }

    pub fn with_score(self, score: u32) -> Self {
        Self { score, ..self }
    }

    pub fn with_tick_count(self, tick_count: u64) -> Self {
        Self { tick_count, ..self }
    }

    /// Pipe pair generated at `spawn_tick`, if still on screen.
    pub fn pipe_by_spawn_tick(&self, spawn_tick: u64) -> Option<&PipePair> {
        self.pipe_pairs.iter().find(|p| p.spawn_tick == spawn_tick)
    }
}
