use crate::core::math::Rect;
use crate::domain::{Body, FlipPolicy};

/// Advance a moving body by one tick. Static bodies never integrate.
#[inline]
pub fn integrate(body: &mut Body, dt: f32) {
    if body.is_static() {
        return;
    }
    body.position += body.velocity * dt;
}

/// Keep a moving body inside `world`, bouncing off the walls per axis.
///
/// When the body's edge passes a wall its centre is clamped so the edge sits
/// exactly on the wall and that velocity component is negated. Returns true
/// if any axis was clamped.
pub fn clamp_to_world(body: &mut Body, world: &Rect) -> bool {
    clamp_to_world_with(body, world, FlipPolicy::Always)
}

/// [`clamp_to_world`] with an explicit flip rule. Under `Approaching` a
/// component already pointing back inside is kept.
pub fn clamp_to_world_with(body: &mut Body, world: &Rect, flips: FlipPolicy) -> bool {
    if body.is_static() {
        return false;
    }
    let r = body.radius();
    let hit_x = bounce_axis(
        &mut body.position.x,
        &mut body.velocity.x,
        world.x + r,
        world.right() - r,
        flips,
    );
    let hit_y = bounce_axis(
        &mut body.position.y,
        &mut body.velocity.y,
        world.y + r,
        world.bottom() - r,
        flips,
    );
    hit_x || hit_y
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32, flips: FlipPolicy) -> bool {
    let always = flips == FlipPolicy::Always;
    // Wider than the arena on this axis: pin to the centre line.
    if lo > hi {
        *pos = (lo + hi) / 2.0;
        *vel = 0.0;
        return true;
    }
    if *pos < lo {
        *pos = lo;
        if always || *vel < 0.0 {
            *vel = -*vel;
        }
        true
    } else if *pos > hi {
        *pos = hi;
        if always || *vel > 0.0 {
            *vel = -*vel;
        }
        true
    } else {
        false
    }
}
