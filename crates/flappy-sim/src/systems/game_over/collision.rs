//! Bird/pipe collision: circle vs axis-aligned rectangle.

use glam::DVec2;

use flappy_core::state::GameState;
use flappy_core::types::Rect;

use super::GameOverDetector;

/// Fires when the bird's circular hit area overlaps either pipe of any pair.
/// The bird sprite's width and height play no part here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    pub radius: f64,
}

impl CollisionDetector {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl GameOverDetector for CollisionDetector {
    fn is_game_over(&self, state: &GameState) -> bool {
        let center = state.bird.position();
        let floor_y = state.floor_y();

        state.pipe_pairs.iter().any(|pair| {
            circle_intersects_rect(center, self.radius, &pair.top_segment())
                || circle_intersects_rect(center, self.radius, &pair.bottom_segment(floor_y))
        })
    }
}

/// Circle/rectangle overlap test.
///
/// Touching along a side (center exactly `half + radius` away on an axis) is
/// not a hit. Once inside both bands the circle hits if its center projects
/// into the rectangle's slab on either axis, or if the nearest corner lies
/// within the radius.
pub fn circle_intersects_rect(center: DVec2, radius: f64, rect: &Rect) -> bool {
    let distance = (center - rect.center).abs();
    let half = rect.half_extents();

    if distance.x >= half.x + radius || distance.y >= half.y + radius {
        return false;
    }
    if distance.x <= half.x || distance.y <= half.y {
        return true;
    }

    (distance - half).length_squared() <= radius * radius
}
