//! Simulation settings, loadable from host JSON.

use serde::{Deserialize, Serialize};

use crate::core::math::Rect;
use crate::spatial::quadtree::QuadTreeLimits;

use super::error::{EngineError, EngineResult};

/// How colliding pairs are visited during the narrow phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairOrder {
    /// Unique `(lo, hi)` pairs in ascending order. Both collision modes
    /// resolve in exactly the same sequence.
    #[default]
    Canonical,
    /// Each body in insertion order tests its own candidates immediately;
    /// an unordered pair may be visited from both sides.
    PerBody,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Quadtree broad phase
    #[default]
    QuadTree,
    /// All-pairs reference path
    BruteForce,
}

/// When a wall bounce or a static-obstacle reflection flips a velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipPolicy {
    /// Every contact flips, whichever way the body is heading
    #[default]
    Always,
    /// Only a velocity still heading into the wall or obstacle is flipped
    Approaching,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Arena width, centred on the origin
    pub world_width: f32,
    /// Arena height, centred on the origin
    pub world_height: f32,
    /// Fixed tick length in seconds
    pub dt: f32,
    pub mode: CollisionMode,
    pub pair_order: PairOrder,
    pub flip_policy: FlipPolicy,
    pub limits: QuadTreeLimits,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: 20.0,
            world_height: 20.0,
            dt: 1.0 / 60.0,
            mode: CollisionMode::QuadTree,
            pair_order: PairOrder::Canonical,
            flip_policy: FlipPolicy::Always,
            limits: QuadTreeLimits::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(self.world_width.is_finite() && self.world_width > 0.0)
            || !(self.world_height.is_finite() && self.world_height > 0.0)
        {
            return Err(EngineError::InvalidRegion {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(EngineError::InvalidConfig(format!("dt must be > 0, got {}", self.dt)));
        }
        if self.limits.max_objects == 0 {
            return Err(EngineError::InvalidConfig("limits.max_objects must be >= 1".into()));
        }
        Ok(())
    }

    /// World rectangle covered by the index root.
    pub fn world_bounds(&self) -> Rect {
        Rect::centered(self.world_width, self.world_height)
    }
}
