use serde::{Deserialize, Serialize};

use super::Vec2;

/// Axis-aligned rectangle stored as min corner plus size.
///
/// Screen convention: `x` grows east, `y` grows south, so the "north" half of
/// a region is the one with the smaller `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size centred on the origin (the arena layout).
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, -height / 2.0, width, height)
    }

    /// Square of side `2 * half_extent` centred on `center`.
    pub fn from_center_half_extent(center: Vec2, half_extent: f32) -> Self {
        let side = half_extent * 2.0;
        Self::new(center.x - half_extent, center.y - half_extent, side, side)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Non-negative, finite size. A zero-area rect is still valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Inclusive overlap test: rects sharing only an edge still intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}
