use serde::{Deserialize, Serialize};

use crate::core::math::{Rect, Vec2};

use super::error::{EngineError, EngineResult};

/// Stable identifier handed out by the owning world (0 = not yet added)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Circular body - moves as a point mass, no rotation
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    // === Physics State ===
    /// World position (center)
    pub position: Vec2,
    /// Velocity (units per second), always zero for static bodies
    pub velocity: Vec2,

    // === Shape / Mass (validated at construction) ===
    mass: f32,
    radius: f32,
    is_static: bool,

    /// Assigned by `WorldCore::add_body`
    pub id: BodyId,
}

/// Plain description of a body, as read from host JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyDesc {
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
    #[serde(default)]
    pub is_static: bool,
}

/// Read-only export of a body's state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub is_static: bool,
}

impl Body {
    /// Validate and build a body. Static bodies always start at rest.
    pub fn new(desc: BodyDesc) -> EngineResult<Self> {
        if !(desc.mass.is_finite() && desc.mass > 0.0) {
            return Err(EngineError::InvalidMass(desc.mass));
        }
        if !(desc.radius.is_finite() && desc.radius > 0.0) {
            return Err(EngineError::InvalidRadius(desc.radius));
        }
        if !desc.position.is_finite() {
            return Err(EngineError::NonFinite("position"));
        }
        if !desc.velocity.is_finite() {
            return Err(EngineError::NonFinite("velocity"));
        }

        let velocity = if desc.is_static { Vec2::zero() } else { desc.velocity };

        Ok(Self {
            position: desc.position,
            velocity,
            mass: desc.mass,
            radius: desc.radius,
            is_static: desc.is_static,
            id: BodyId::default(),
        })
    }

    /// Create a moving body
    pub fn new_dynamic(
        position: Vec2,
        velocity: Vec2,
        mass: f32,
        radius: f32,
    ) -> EngineResult<Self> {
        Self::new(BodyDesc { position, velocity, mass, radius, is_static: false })
    }

    /// Create a fixed obstacle
    pub fn new_static(position: Vec2, mass: f32, radius: f32) -> EngineResult<Self> {
        Self::new(BodyDesc {
            position,
            velocity: Vec2::zero(),
            mass,
            radius,
            is_static: true,
        })
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Bounding square used as the broad-phase key. Never cached: the
    /// position changes every tick.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extent(self.position, self.radius)
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.id.0,
            position: self.position,
            velocity: self.velocity,
            mass: self.mass,
            radius: self.radius,
            is_static: self.is_static,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass_and_radius() {
        let p = Vec2::zero();
        assert!(matches!(
            Body::new_dynamic(p, p, 0.0, 1.0),
            Err(EngineError::InvalidMass(_))
        ));
        assert!(matches!(
            Body::new_dynamic(p, p, -2.0, 1.0),
            Err(EngineError::InvalidMass(_))
        ));
        assert!(matches!(
            Body::new_dynamic(p, p, 1.0, 0.0),
            Err(EngineError::InvalidRadius(_))
        ));
        assert!(matches!(
            Body::new_static(p, 1.0, f32::NAN),
            Err(EngineError::InvalidRadius(_))
        ));
    }

    #[test]
    fn rejects_non_finite_state() {
        let bad = Vec2::new(f32::INFINITY, 0.0);
        assert!(matches!(
            Body::new_dynamic(bad, Vec2::zero(), 1.0, 1.0),
            Err(EngineError::NonFinite("position"))
        ));
        assert!(matches!(
            Body::new_dynamic(Vec2::zero(), bad, 1.0, 1.0),
            Err(EngineError::NonFinite("velocity"))
        ));
    }

    #[test]
    fn static_body_is_created_at_rest() {
        let body = Body::new(BodyDesc {
            position: Vec2::new(1.0, 2.0),
            velocity: Vec2::new(5.0, 5.0),
            mass: 1.0,
            radius: 0.5,
            is_static: true,
        })
        .unwrap();
        assert!(body.is_static());
        assert_eq!(body.velocity, Vec2::zero());
    }

    #[test]
    fn bounds_is_square_around_center() {
        let body = Body::new_dynamic(Vec2::new(2.0, -1.0), Vec2::zero(), 1.0, 0.5).unwrap();
        let b = body.bounds();
        assert_eq!(b, Rect::new(1.5, -1.5, 1.0, 1.0));
    }

    #[test]
    fn desc_parses_with_defaults() {
        let desc: BodyDesc =
            serde_json::from_str(r#"{"position":{"x":1.0,"y":2.0},"mass":2.0,"radius":0.25}"#)
                .unwrap();
        assert_eq!(desc.velocity, Vec2::zero());
        assert!(!desc.is_static);
    }
}
