//! Game configuration, supplied once at engine construction.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Every tunable of a game. Immutable once handed to an engine.
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub ground_height: u32,
    pub bird_width: f64,
    pub bird_height: f64,
    pub bird_ay: f64,
    pub pipe_width: u32,
    pub pipe_vx: f64,
    pub ticks_per_generation: u64,
    pub hole_height: u32,
    pub min_pipe_height: u32,
    pub jump_vy: f64,
    pub bird_radius: f64,
    /// RNG seed. Same seed + same inputs = same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_ay: BIRD_AY,
            pipe_width: PIPE_WIDTH,
            pipe_vx: PIPE_VX,
            ticks_per_generation: TICKS_PER_GENERATION,
            hole_height: HOLE_HEIGHT,
            min_pipe_height: MIN_PIPE_HEIGHT,
            jump_vy: JUMP_VY,
            bird_radius: BIRD_RADIUS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Height between the top of the screen and the top of the ground strip.
    /// Saturates at zero for an invalid config.
    pub fn playable_height(&self) -> u32 {
        self.screen_height.saturating_sub(self.ground_height)
    }

    /// Reject configurations under which pipe generation cannot produce a
    /// valid split, or the simulation would not make sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("bird_ay", self.bird_ay),
            ("pipe_vx", self.pipe_vx),
            ("jump_vy", self.jump_vy),
            ("bird_radius", self.bird_radius),
        ];
        if let Some((field, _)) = rates.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        let sizes = [
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("bird_radius", self.bird_radius),
        ];
        if let Some(&(field, value)) = sizes.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Negative { field, value });
        }

        if self.ground_height >= self.screen_height {
            return Err(ConfigError::GroundTooTall {
                ground_height: self.ground_height,
                screen_height: self.screen_height,
            });
        }

        if self.ticks_per_generation == 0 {
            return Err(ConfigError::ZeroGenerationCadence);
        }

        if self.pipe_vx >= 0.0 {
            return Err(ConfigError::PipesNotApproaching {
                pipe_vx: self.pipe_vx,
            });
        }

        let needed = u64::from(self.hole_height) + 2 * u64::from(self.min_pipe_height);
        if needed > u64::from(self.playable_height()) {
            return Err(ConfigError::HoleDoesNotFit {
                hole_height: self.hole_height,
                min_pipe_height: self.min_pipe_height,
                playable_height: self.playable_height(),
            });
        }

        Ok(())
    }
}
