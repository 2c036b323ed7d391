//! Playfield geometry
//!
//! The field is a plain rectangle with the origin at the top-left corner and
//! `y` growing downward. Paddles and the ball are tested against each other as
//! axis-aligned rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Tuning;

/// Constant bounds everything else is simulated within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.field_width, tuning.field_height)
    }

    /// Serve point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Horizontal midpoint separating the two halves
    #[inline]
    pub fn midline(&self) -> f32 {
        self.width / 2.0
    }
}

/// Axis-aligned rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Enclosing square of a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}
