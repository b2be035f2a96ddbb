use crate::domain::Body;

/// True iff the circles overlap. Exact tangency is not a collision.
#[inline]
pub fn test_overlap(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius() + b.radius()
}

/// Overlap depth along the centre line (negative when apart).
#[inline]
pub fn penetration(a: &Body, b: &Body) -> f32 {
    (a.radius() + b.radius()) - a.position.distance(b.position)
}
