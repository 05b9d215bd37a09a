//! Fundamental entity and geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The player-controlled bird.
///
/// Screen coordinates: x grows rightwards, y grows downwards, so a negative
/// `vy` moves the bird up. `x` is fixed at creation and never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Sprite width. Not used for collisions.
    pub width: f64,
    /// Sprite height. Only the ground bounds check uses it.
    pub height: f64,
    /// Vertical velocity (units/tick).
    pub vy: f64,
    /// Constant vertical acceleration (units/tick²).
    pub ay: f64,
}

impl Bird {
    /// Center point of the bird.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Y coordinate of the bird's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Copy with a new vertical velocity.
    pub fn with_vy(self, vy: f64) -> Self {
        Self { vy, ..self }
    }
}

/// One obstacle: a top and a bottom pipe with a hole between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Tick at which the pair was generated. Unique per pair, since at most
    /// one pair spawns per tick.
    pub spawn_tick: u64,
    /// Left edge.
    pub x: f64,
    pub width: f64,
    pub top_height: f64,
    pub bottom_height: f64,
    /// Horizontal velocity (negative = towards the bird).
    pub vx: f64,
}

impl PipePair {
    /// Horizontal center of the pair.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Right edge. Once this is negative the pair is fully off screen.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Vertical center of the hole between the two pipes.
    pub fn hole_center_y(&self, floor_y: f64) -> f64 {
        (self.top_height + (floor_y - self.bottom_height)) / 2.0
    }

    /// Solid rectangle of the top pipe, hanging from y = 0.
    pub fn top_segment(&self) -> Rect {
        Rect::from_center_size(
            DVec2::new(self.center_x(), self.top_height / 2.0),
            DVec2::new(self.width, self.top_height),
        )
    }

    /// Solid rectangle of the bottom pipe, standing on `floor_y`
    /// (the top of the ground strip).
    pub fn bottom_segment(&self, floor_y: f64) -> Rect {
        Rect::from_center_size(
            DVec2::new(self.center_x(), floor_y - self.bottom_height / 2.0),
            DVec2::new(self.width, self.bottom_height),
        )
    }
}

/// Axis-aligned rectangle stored as center + full size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        Self { center, size }
    }

    pub fn half_extents(&self) -> DVec2 {
        self.size / 2.0
    }
}
