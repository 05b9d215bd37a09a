//! Kinematic integration system.
//!
//! Semi-implicit Euler: the bird's velocity is updated first and the new
//! velocity moves it, so a jump set before a tick shows up in that tick's
//! displacement. Pipes translate by their own horizontal velocity.

use flappy_core::state::GameState;
use flappy_core::types::{Bird, PipePair};

/// Advance the bird and every pipe pair by one tick.
pub fn run(state: &GameState) -> GameState {
    let pipe_pairs = state.pipe_pairs.iter().map(move_pipe_pair).collect();
    state.with_bird(move_bird(&state.bird)).with_pipe_pairs(pipe_pairs)
}

fn move_bird(bird: &Bird) -> Bird {
    let vy = bird.vy + bird.ay;
    Bird {
        y: bird.y + vy,
        vy,
        ..*bird
    }
}

fn move_pipe_pair(pair: &PipePair) -> PipePair {
    PipePair {
        x: pair.x + pair.vx,
        ..*pair
    }
}
