//! Game-over detection.
//!
//! A [`GameOverDecider`] holds an unordered set of independent detectors and
//! reports game over if any of them fires. Detectors are stateless, so the
//! answer for a given snapshot never depends on evaluation order or on how
//! many times it is asked.

pub mod bounds;
pub mod collision;

use flappy_core::state::GameState;

pub use bounds::OutOfBoundsDetector;
pub use collision::CollisionDetector;

/// A single check over a full snapshot.
pub trait GameOverDetector {
    fn is_game_over(&self, state: &GameState) -> bool;
}

/// Logical OR over a set of detectors.
pub struct GameOverDecider {
    detectors: Vec<Box<dyn GameOverDetector + Send + Sync>>,
}

impl GameOverDecider {
    /// Default set: pipe collisions (with the given bird radius) and ground
    /// contact.
    pub fn new(bird_radius: f64) -> Self {
        Self::with_detectors(vec![
            Box::new(CollisionDetector::new(bird_radius)),
            Box::new(OutOfBoundsDetector),
        ])
    }

    pub fn with_detectors(detectors: Vec<Box<dyn GameOverDetector + Send + Sync>>) -> Self {
        Self { detectors }
    }

    pub fn is_game_over(&self, state: &GameState) -> bool {
        self.detectors.iter().any(|d| d.is_game_over(state))
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl std::fmt::Debug for GameOverDecider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameOverDecider")
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy_core::config::GameConfig;

    struct Always(bool);

    impl GameOverDetector for Always {
        fn is_game_over(&self, _state: &GameState) -> bool {
            self.0
        }
    }

    #[test]
    fn test_any_detector_fires() {
        let state = GameState::initial(&GameConfig::default());
        let decider = GameOverDecider::with_detectors(vec![
            Box::new(Always(false)),
            Box::new(Always(true)),
        ]);
        assert!(decider.is_game_over(&state));

        let reversed = GameOverDecider::with_detectors(vec![
            Box::new(Always(true)),
            Box::new(Always(false)),
        ]);
        assert!(reversed.is_game_over(&state));
    }

    #[test]
    fn test_empty_set_never_fires() {
        let state = GameState::initial(&GameConfig::default());
        let decider = GameOverDecider::with_detectors(Vec::new());
        assert!(decider.is_empty());
        assert!(!decider.is_game_over(&state));
    }

    #[test]
    fn test_default_set() {
        let decider = GameOverDecider::new(35.0);
        assert_eq!(decider.len(), 2);
        assert!(!decider.is_game_over(&GameState::initial(&GameConfig::default())));
    }
}
