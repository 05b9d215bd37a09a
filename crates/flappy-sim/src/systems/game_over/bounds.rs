//! Ground contact check.

use flappy_core::state::GameState;

use super::GameOverDetector;

/// Fires once the bird's bottom edge sinks below the top of the ground strip.
/// Flying off the top of the screen is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutOfBoundsDetector;

impl GameOverDetector for OutOfBoundsDetector {
    fn is_game_over(&self, state: &GameState) -> bool {
        state.bird.bottom() > state.floor_y()
    }
}
