//! Scripted input source that keeps the bird alive.

use flappy_core::state::GameState;

/// How far below the hole center the bird may sink before flapping.
pub const AIM_BELOW_HOLE_CENTER: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    bird_radius: f64,
    aim_offset: f64,
}

impl Autopilot {
    pub fn new(bird_radius: f64) -> Self {
        Self {
            bird_radius,
            aim_offset: AIM_BELOW_HOLE_CENTER,
        }
    }

    pub fn with_aim_offset(self, aim_offset: f64) -> Self {
        Self { aim_offset, ..self }
    }

    /// Height the bird should stay above.
    ///
    /// Aims at the hole of the first pair the bird has not fully passed, or
    /// the middle of the playfield when no pair is on screen.
    pub fn target_y(&self, state: &GameState) -> f64 {
        let bird_x = state.bird.x;
        state
            .pipe_pairs
            .iter()
            .find(|pair| pair.trailing_edge() + self.bird_radius > bird_x)
            .map(|pair| pair.hole_center_y(state.floor_y()) + self.aim_offset)
            .unwrap_or(state.floor_y() / 2.0)
    }

    /// Flap when below the target and no longer rising.
    pub fn should_jump(&self, state: &GameState) -> bool {
        state.bird.y > self.target_y(state) && state.bird.vy >= 0.0
    }
}
