use wasm_bindgen::prelude::*;

use crate::core::math::Vec2;
use crate::domain::{Body, BodyId, EngineError, PairOrder};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Values per body in `body_state`: x, y, vx, vy, radius, static flag
pub const BODY_STATE_STRIDE: usize = 6;
/// Values per node in `index_bounds`: x, y, width, height, level
pub const INDEX_BOUNDS_STRIDE: usize = 5;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world of the given size, centred on the origin
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        Ok(Self {
            core: WorldCore::new(width, height).map_err(to_js)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.config().world_width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.config().world_height }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn optimization_enabled(&self) -> bool { self.core.optimization_enabled() }

    /// Toggle between the quadtree and the all-pairs broad phase
    pub fn set_optimization_enabled(&mut self, enabled: bool) {
        self.core.set_optimization_enabled(enabled);
    }

    /// "canonical" or "per_body"
    pub fn set_pair_order(&mut self, order: &str) -> Result<(), JsValue> {
        let order = match order {
            "canonical" => PairOrder::Canonical,
            "per_body" => PairOrder::PerBody,
            other => {
                return Err(to_js(EngineError::InvalidConfig(format!(
                    "unknown pair order: {other}"
                ))))
            }
        };
        self.core.set_pair_order(order);
        Ok(())
    }

    pub fn set_world_size(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_world_size(width, height).map_err(to_js)
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === BODY API ===

    /// Returns the new body's id
    pub fn add_dynamic_body(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        mass: f32,
        radius: f32,
    ) -> Result<u32, JsValue> {
        let body = Body::new_dynamic(Vec2::new(x, y), Vec2::new(vx, vy), mass, radius)
            .map_err(to_js)?;
        Ok(self.core.add_body(body).map_err(to_js)?.0)
    }

    /// Returns the new body's id
    pub fn add_static_body(
        &mut self,
        x: f32,
        y: f32,
        mass: f32,
        radius: f32,
    ) -> Result<u32, JsValue> {
        let body = Body::new_static(Vec2::new(x, y), mass, radius).map_err(to_js)?;
        Ok(self.core.add_body(body).map_err(to_js)?.0)
    }

    /// Add a JSON array of `{position, velocity, mass, radius, is_static}`.
    /// Returns the new ids in order.
    pub fn add_bodies_json(&mut self, json: String) -> Result<Vec<u32>, JsValue> {
        let ids = self.core.add_bodies_json(&json).map_err(to_js)?;
        Ok(ids.into_iter().map(|id| id.0).collect())
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(BodyId(id))
    }

    /// Clear all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick. Returns the number of
    /// collisions resolved.
    pub fn step(&mut self) -> u32 {
        self.core.step().collisions as u32
    }

    #[wasm_bindgen(getter)]
    pub fn overlap_tests(&self) -> u32 { self.core.counters().overlap_tests as u32 }

    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.core.counters().collisions as u32 }

    // === RENDER DATA ===

    /// Flattened `[x, y, vx, vy, radius, static]` per body, insertion order
    pub fn body_state(&self) -> Vec<f32> {
        let bodies = self.core.bodies();
        let mut out = Vec::with_capacity(bodies.len() * BODY_STATE_STRIDE);
        for b in bodies {
            out.extend_from_slice(&[
                b.position.x,
                b.position.y,
                b.velocity.x,
                b.velocity.y,
                b.radius(),
                if b.is_static() { 1.0 } else { 0.0 },
            ]);
        }
        out
    }

    /// Flattened `[x, y, width, height, level]` per index node (debug overlay)
    pub fn index_bounds(&self) -> Vec<f32> {
        let regions = self.core.index_regions();
        let mut out = Vec::with_capacity(regions.len() * INDEX_BOUNDS_STRIDE);
        for (r, level) in regions {
            out.extend_from_slice(&[r.x, r.y, r.width, r.height, level as f32]);
        }
        out
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(to_js)
    }
}
