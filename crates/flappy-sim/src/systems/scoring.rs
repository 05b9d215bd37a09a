//! Scoring system: counts pipe pairs the bird has passed.
//!
//! A pair is cleared on the tick where the bird goes from strictly left of
//! the pair's center to at-or-right of it. Pairs are matched between the two
//! snapshots by `spawn_tick` rather than by position in the list, so a pair
//! pruned from the front between snapshots cannot shift the comparison onto
//! the wrong neighbour.

use tracing::debug;

use flappy_core::state::GameState;

/// Running score for the current game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Compare the last committed snapshot with the candidate next one and
    /// add one point per pair crossed. Returns the spawn ticks of the pairs
    /// cleared this tick. Pairs missing from `previous` (spawned this tick)
    /// cannot cross.
    pub fn update(&mut self, previous: &GameState, next: &GameState) -> Vec<u64> {
        let cleared: Vec<u64> = next
            .pipe_pairs
            .iter()
            .filter_map(|next_pair| {
                let prev_pair = previous.pipe_by_spawn_tick(next_pair.spawn_tick)?;
                crossed(
                    previous.bird.x,
                    prev_pair.center_x(),
                    next.bird.x,
                    next_pair.center_x(),
                )
                .then_some(next_pair.spawn_tick)
            })
            .collect();

        for spawn_tick in &cleared {
            self.score += 1;
            debug!(spawn_tick, score = self.score, "pipe pair cleared");
        }
        cleared
    }
}

/// A single-tick crossing: strictly left of the old center, at or right of
/// the new one.
pub fn crossed(prev_bird_x: f64, prev_center: f64, next_bird_x: f64, next_center: f64) -> bool {
    prev_bird_x < prev_center && next_center <= next_bird_x
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy_core::config::GameConfig;
    use flappy_core::types::{Bird, PipePair};

    fn pair(spawn_tick: u64, center_x: f64) -> PipePair {
        PipePair {
            spawn_tick,
            x: center_x - 5.0,
            width: 10.0,
            top_height: 150.0,
            bottom_height: 292.0,
            vx: -3.0,
        }
    }

    fn state(bird_x: f64, pairs: Vec<PipePair>) -> GameState {
        let state = GameState::initial(&GameConfig::default());
        state
            .with_bird(Bird {
                x: bird_x,
                ..state.bird
            })
            .with_pipe_pairs(pairs)
    }

    #[test]
    fn test_crossing_scores_once() {
        let previous = state(100.0, vec![pair(0, 105.0)]);
        let next = state(106.0, vec![pair(0, 102.0)]);
        let mut tracker = ScoreTracker::new();
        assert_eq!(tracker.update(&previous, &next), vec![0]);
        assert_eq!(tracker.score(), 1);
    }

    #[test]
    fn test_no_score_while_left_of_center() {
        let previous = state(100.0, vec![pair(0, 110.0)]);
        let next = state(100.0, vec![pair(0, 107.0)]);
        let mut tracker = ScoreTracker::new();
        assert!(tracker.update(&previous, &next).is_empty());
        assert_eq!(tracker.score(), 0);
    }

    #[test]
    fn test_landing_exactly_on_center_counts() {
        assert!(crossed(300.0, 302.0, 300.0, 300.0));
        assert!(!crossed(300.0, 300.0, 300.0, 297.0));
    }

    #[test]
    fn test_already_passed_does_not_score_again() {
        let previous = state(300.0, vec![pair(0, 298.0)]);
        let next = state(300.0, vec![pair(0, 295.0)]);
        let mut tracker = ScoreTracker::new();
        tracker.update(&previous, &next);
        assert_eq!(tracker.score(), 0);
    }

    #[test]
    fn test_each_crossing_pair_counts() {
        let previous = state(300.0, vec![pair(0, 301.0), pair(1, 302.0)]);
        let next = state(300.0, vec![pair(0, 298.0), pair(1, 299.0)]);
        let mut tracker = ScoreTracker::new();
        assert_eq!(tracker.update(&previous, &next), vec![0, 1]);
        assert_eq!(tracker.score(), 2);
    }

    /// The leading pair disappears between the snapshots. Index matching would
    /// compare pair 120's new center against pair 0's old one.
    #[test]
    fn test_matching_survives_pruned_leading_pair() {
        let previous = state(300.0, vec![pair(0, -10.0), pair(120, 302.0)]);
        let next = state(300.0, vec![pair(120, 299.0)]);
        let mut tracker = ScoreTracker::new();
        assert_eq!(tracker.update(&previous, &next), vec![120]);
        assert_eq!(tracker.score(), 1);
    }

    #[test]
    fn test_newly_spawned_pair_cannot_cross() {
        let previous = state(300.0, vec![]);
        let next = state(300.0, vec![pair(0, 200.0)]);
        let mut tracker = ScoreTracker::new();
        assert!(tracker.update(&previous, &next).is_empty());
    }

    #[test]
    fn test_reset() {
        let previous = state(100.0, vec![pair(0, 105.0)]);
        let next = state(106.0, vec![pair(0, 102.0)]);
        let mut tracker = ScoreTracker::new();
        tracker.update(&previous, &next);
        tracker.reset();
        assert_eq!(tracker.score(), 0);
    }
}
