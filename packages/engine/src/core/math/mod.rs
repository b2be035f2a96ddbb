//! Geometry primitives shared by the index and the solver.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
