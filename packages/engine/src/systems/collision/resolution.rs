use crate::core::math::Vec2;
use crate::domain::{Body, FlipPolicy};

/// What `resolve` changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Velocities were exchanged or reflected
    pub impulse_applied: bool,
    /// Positions were pushed apart
    pub separated: bool,
}

/// Two distinct mutable bodies from one slice.
///
/// Panics if `i == j`: a body never collides with itself.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert_ne!(i, j, "a body cannot collide with itself");
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

/// Resolve a collision between two overlapping bodies.
///
/// Callers gate this with `test_overlap`. The normal points from `a` to `b`;
/// coincident centres fall back to +X so no NaN reaches the velocities.
/// A moving body touching a static one is always reflected.
pub fn resolve(a: &mut Body, b: &mut Body) -> ResolveOutcome {
    resolve_with(a, b, FlipPolicy::Always)
}

/// [`resolve`] with an explicit rule for static-obstacle reflection.
pub fn resolve_with(a: &mut Body, b: &mut Body, flips: FlipPolicy) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();
    if a.is_static() && b.is_static() {
        return outcome;
    }

    let normal = (b.position - a.position).normalize_or(Vec2::X);

    // === Velocity response ===
    match (a.is_static(), b.is_static()) {
        (false, false) => {
            let relative = b.velocity - a.velocity;
            let separating = relative.dot(normal);
            // Already moving apart: leave velocities alone.
            if separating <= 0.0 {
                let impulse = 2.0 * separating / (a.mass() + b.mass());
                a.velocity += normal * (impulse * b.mass());
                b.velocity -= normal * (impulse * a.mass());
                outcome.impulse_applied = true;
            }
        }
        (false, true) => {
            outcome.impulse_applied = reflect_off_static(&mut a.velocity, -normal, flips);
        }
        (true, false) => {
            outcome.impulse_applied = reflect_off_static(&mut b.velocity, normal, flips);
        }
        (true, true) => unreachable!(),
    }

    // === Overlap separation (always) ===
    let overlap = (a.radius() + b.radius()) - a.position.distance(b.position);
    if overlap > 0.0 {
        match (a.is_static(), b.is_static()) {
            (false, false) => {
                let half = normal * (overlap / 2.0);
                a.position -= half;
                b.position += half;
            }
            // The moving body takes the whole correction.
            (false, true) => a.position -= normal * overlap,
            (true, false) => b.position += normal * overlap,
            (true, true) => unreachable!(),
        }
        outcome.separated = true;
    }

    outcome
}

/// Mirror `velocity` about `away` (unit normal pointing out of the obstacle).
/// Under `Approaching` a body already leaving keeps its velocity. Returns
/// whether the reflection was applied.
fn reflect_off_static(velocity: &mut Vec2, away: Vec2, flips: FlipPolicy) -> bool {
    if flips == FlipPolicy::Approaching && velocity.dot(away) >= 0.0 {
        return false;
    }
    *velocity = velocity.reflect(away);
    true
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::systems::collision::test_overlap;

    fn dynamic(x: f32, y: f32, vx: f32, vy: f32, mass: f32, radius: f32) -> Body {
        Body::new_dynamic(Vec2::new(x, y), Vec2::new(vx, vy), mass, radius).unwrap()
    }

    #[test]
    fn head_on_equal_masses_swap_velocities() {
        let mut a = dynamic(-0.4, 0.0, 1.0, 0.0, 1.0, 0.5);
        let mut b = dynamic(0.4, 0.0, -1.0, 0.0, 1.0, 0.5);
        assert!(test_overlap(&a, &b));

        let outcome = resolve(&mut a, &mut b);
        assert!(outcome.impulse_applied && outcome.separated);

        assert_relative_eq!(a.velocity.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(a.velocity.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(b.velocity.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(a.position.distance(b.position), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn momentum_is_conserved() {
        let mut a = dynamic(0.0, 0.0, 2.0, 0.5, 3.0, 0.6);
        let mut b = dynamic(0.7, 0.3, -1.0, -0.2, 0.5, 0.4);
        let before = a.momentum() + b.momentum();
        resolve(&mut a, &mut b);
        let after = a.momentum() + b.momentum();
        assert_relative_eq!(before.x, after.x, epsilon = 1e-5);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-5);
    }

    #[test]
    fn tangential_velocity_is_untouched() {
        let mut a = dynamic(0.0, 0.0, 1.0, 3.0, 1.0, 0.5);
        let mut b = dynamic(0.8, 0.0, 0.0, -2.0, 1.0, 0.5);
        resolve(&mut a, &mut b);
        // Normal is +X, so Y components survive.
        assert_relative_eq!(a.velocity.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(b.velocity.y, -2.0, epsilon = 1e-6);
    }

    #[test]
    fn separating_pair_keeps_velocity_but_is_pushed_apart() {
        let mut a = dynamic(-0.4, 0.0, -1.0, 0.0, 1.0, 0.5);
        let mut b = dynamic(0.4, 0.0, 1.0, 0.0, 1.0, 0.5);
        let outcome = resolve(&mut a, &mut b);
        assert!(!outcome.impulse_applied);
        assert!(outcome.separated);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
        assert_relative_eq!(a.position.distance(b.position), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn dynamic_reflects_off_static_and_static_never_moves() {
        let mut wall = Body::new_static(Vec2::new(0.0, 0.0), 5.0, 1.0).unwrap();
        let mut ball = dynamic(1.3, 0.0, -2.0, 1.0, 1.0, 0.5);
        let wall_before = wall.clone();

        let outcome = resolve(&mut ball, &mut wall);
        assert!(outcome.impulse_applied);
        assert_relative_eq!(ball.velocity.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(ball.velocity.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(ball.position.distance(wall.position), 1.5, epsilon = 1e-6);
        assert_eq!(wall, wall_before);

        // Argument order does not matter.
        let mut ball = dynamic(1.3, 0.0, -2.0, 1.0, 1.0, 0.5);
        resolve(&mut wall, &mut ball);
        assert_relative_eq!(ball.velocity.x, 2.0, epsilon = 1e-6);
        assert_eq!(wall, wall_before);
    }

    #[test]
    fn receding_body_is_still_reflected_by_default() {
        let mut wall = Body::new_static(Vec2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let mut ball = dynamic(1.3, 0.0, 2.0, 1.0, 1.0, 0.5);
        let outcome = resolve(&mut ball, &mut wall);
        assert!(outcome.impulse_applied);
        assert_relative_eq!(ball.velocity.x, -2.0, epsilon = 1e-6);
        assert_relative_eq!(ball.velocity.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn approaching_policy_leaves_receding_body_alone() {
        let mut wall = Body::new_static(Vec2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let mut ball = dynamic(1.3, 0.0, 2.0, 1.0, 1.0, 0.5);
        let outcome = resolve_with(&mut ball, &mut wall, FlipPolicy::Approaching);
        assert!(!outcome.impulse_applied);
        assert!(outcome.separated);
        assert_eq!(ball.velocity, Vec2::new(2.0, 1.0));

        // Heading in: reflected under both policies.
        let mut ball = dynamic(1.3, 0.0, -2.0, 1.0, 1.0, 0.5);
        assert!(resolve_with(&mut ball, &mut wall, FlipPolicy::Approaching).impulse_applied);
        assert_relative_eq!(ball.velocity.x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn two_statics_are_a_no_op() {
        let mut a = Body::new_static(Vec2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let mut b = Body::new_static(Vec2::new(0.5, 0.0), 1.0, 1.0).unwrap();
        let (a0, b0) = (a.clone(), b.clone());
        assert_eq!(resolve(&mut a, &mut b), ResolveOutcome::default());
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn coincident_centres_resolve_along_fixed_axis() {
        let mut a = dynamic(1.0, 1.0, 0.0, 0.0, 1.0, 0.5);
        let mut b = dynamic(1.0, 1.0, 0.0, 0.0, 1.0, 0.5);
        resolve(&mut a, &mut b);
        assert!(a.position.is_finite() && b.position.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert_relative_eq!(a.position.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(b.position.x, 1.5, epsilon = 1e-6);
        assert_eq!(a.position.y, 1.0);
    }

    #[test]
    fn no_penetration_left_after_resolve() {
        let cases = [
            (dynamic(0.0, 0.0, 1.0, 0.0, 1.0, 0.5), dynamic(0.1, 0.2, 0.0, 0.0, 2.0, 0.7)),
            (dynamic(3.0, -1.0, 0.0, 4.0, 0.5, 0.3), dynamic(3.2, -0.9, 1.0, 0.0, 1.5, 0.3)),
            (
                dynamic(0.0, 0.0, 0.0, 0.0, 1.0, 0.8),
                Body::new_static(Vec2::new(0.5, 0.5), 1.0, 0.8).unwrap(),
            ),
        ];
        for (mut a, mut b) in cases {
            resolve(&mut a, &mut b);
            let d = a.position.distance(b.position);
            assert!(d >= a.radius() + b.radius() - 1e-5, "still penetrating: {d}");
        }
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut bodies = vec![
            dynamic(0.0, 0.0, 0.0, 0.0, 1.0, 0.1),
            dynamic(1.0, 0.0, 0.0, 0.0, 1.0, 0.2),
            dynamic(2.0, 0.0, 0.0, 0.0, 1.0, 0.3),
        ];
        let (a, b) = pair_mut(&mut bodies, 2, 0);
        assert_eq!(a.radius(), 0.3);
        assert_eq!(b.radius(), 0.1);
        let (a, b) = pair_mut(&mut bodies, 0, 1);
        assert_eq!((a.radius(), b.radius()), (0.1, 0.2));
    }

    #[test]
    #[should_panic(expected = "itself")]
    fn pair_mut_rejects_self_pair() {
        let mut bodies = vec![dynamic(0.0, 0.0, 0.0, 0.0, 1.0, 0.1)];
        let _ = pair_mut(&mut bodies, 0, 0);
    }
}
