use wasm_bindgen::prelude::*;

use crate::systems::StepCounters;

/// Timings and counters of the last step. Everything stays zero while
/// perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) broad_ms: f64,
    pub(super) narrow_ms: f64,
    pub(super) body_count: u32,
    pub(super) overlap_tests: u32,
    pub(super) collisions: u32,
    pub(super) impulses: u32,
    pub(super) wall_bounces: u32,
    pub(super) index_nodes: u32,
    pub(super) index_depth: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_counters(&mut self, counters: &StepCounters) {
        self.body_count = saturate(counters.body_count);
        self.overlap_tests = saturate(counters.overlap_tests);
        self.collisions = saturate(counters.collisions);
        self.impulses = saturate(counters.impulses);
        self.wall_bounces = saturate(counters.wall_bounces);
        self.index_nodes = saturate(counters.index_nodes);
        self.index_depth = counters.index_depth;
    }
}

#[inline]
fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn broad_ms(&self) -> f64 { self.broad_ms }
    #[wasm_bindgen(getter)]
    pub fn narrow_ms(&self) -> f64 { self.narrow_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn overlap_tests(&self) -> u32 { self.overlap_tests }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
    #[wasm_bindgen(getter)]
    pub fn index_nodes(&self) -> u32 { self.index_nodes }
    #[wasm_bindgen(getter)]
    pub fn index_depth(&self) -> u32 { self.index_depth }
}
