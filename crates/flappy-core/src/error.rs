//! Error types.

/// A configuration that cannot produce a playable game.
///
/// Configuration is checked once when an engine is built; per-tick code
/// never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The hole plus two minimum-height pipes does not fit above the ground.
    #[error(
        "hole height {hole_height} plus two pipes of at least {min_pipe_height} \
         exceeds the {playable_height} units above the ground"
    )]
    HoleDoesNotFit {
        hole_height: u32,
        min_pipe_height: u32,
        playable_height: u32,
    },

    #[error("ground height {ground_height} leaves no room in a {screen_height}-unit screen")]
    GroundTooTall {
        ground_height: u32,
        screen_height: u32,
    },

    #[error("pipe generation cadence must be at least one tick")]
    ZeroGenerationCadence,

    #[error("pipe velocity {pipe_vx} must be negative so pipes move towards the bird")]
    PipesNotApproaching { pipe_vx: f64 },

    #[error("config field '{field}' must be finite")]
    NonFinite { field: &'static str },

    #[error("config field '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}
