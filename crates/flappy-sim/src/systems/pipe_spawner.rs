//! Pipe spawning system: generates a pipe pair at a fixed tick cadence.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use flappy_core::config::GameConfig;
use flappy_core::state::GameState;
use flappy_core::types::PipePair;

/// Cadence and hole geometry for generated pipe pairs.
///
/// Built from a validated [`GameConfig`], so `hole_height + 2 * min_pipe_height`
/// always fits above the ground and the random range below is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeGenerator {
    pub ticks_per_generation: u64,
    pub hole_height: u32,
    pub min_pipe_height: u32,
}

impl PipeGenerator {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            ticks_per_generation: config.ticks_per_generation,
            hole_height: config.hole_height,
            min_pipe_height: config.min_pipe_height,
        }
    }

    /// Whether a pair spawns at this tick. Tick 0 always spawns.
    pub fn is_due(&self, tick_count: u64) -> bool {
        tick_count % self.ticks_per_generation == 0
    }

    /// Spawn a new pair if one is due at `tick_count`.
    pub fn run(
        &self,
        tick_count: u64,
        state: &GameState,
        rng: &mut ChaCha8Rng,
    ) -> Option<PipePair> {
        self.is_due(tick_count)
            .then(|| self.generate(tick_count, state, rng))
    }

    /// Build a pair at the right edge with a random split of the non-hole
    /// height. Both segments are at least `min_pipe_height` tall.
    pub fn generate(&self, tick_count: u64, state: &GameState, rng: &mut ChaCha8Rng) -> PipePair {
        let playable = state.floor_y() as u32;
        let total_pipe_height = playable - self.hole_height;
        let max_top = total_pipe_height - self.min_pipe_height;

        let top_height = rng.gen_range(self.min_pipe_height..=max_top);
        let bottom_height = total_pipe_height - top_height;

        debug!(
            tick = tick_count,
            top_height, bottom_height, "spawned pipe pair"
        );

        PipePair {
            spawn_tick: tick_count,
            x: state.screen_width,
            width: state.pipe_width,
            top_height: f64::from(top_height),
            bottom_height: f64::from(bottom_height),
            vx: state.pipe_vx,
        }
    }
}
