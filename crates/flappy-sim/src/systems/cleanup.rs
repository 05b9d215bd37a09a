//! Cleanup system: drops pipe pairs that have scrolled off the left edge.

use flappy_core::types::PipePair;

/// Keep pairs whose trailing edge is still at or right of x = 0.
/// Order is preserved.
pub fn run(pipe_pairs: &[PipePair]) -> Vec<PipePair> {
    pipe_pairs
        .iter()
        .filter(|pair| pair.trailing_edge() >= 0.0)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(spawn_tick: u64, x: f64) -> PipePair {
        PipePair {
            spawn_tick,
            x,
            width: 138.0,
            top_height: 150.0,
            bottom_height: 292.0,
            vx: -3.0,
        }
    }

    #[test]
    fn test_removed_only_once_fully_off_screen() {
        let kept = run(&[pair(0, -138.0), pair(1, -139.0), pair(2, -137.5)]);
        let ticks: Vec<u64> = kept.iter().map(|p| p.spawn_tick).collect();
        assert_eq!(ticks, vec![0, 2]);
    }

    #[test]
    fn test_order_preserved() {
        let kept = run(&[pair(0, -500.0), pair(120, 10.0), pair(240, 370.0)]);
        let ticks: Vec<u64> = kept.iter().map(|p| p.spawn_tick).collect();
        assert_eq!(ticks, vec![120, 240]);
    }

    #[test]
    fn test_empty() {
        assert!(run(&[]).is_empty());
    }
}
