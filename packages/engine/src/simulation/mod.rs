//! World - owns the bodies and drives the tick.
//!
//! `WorldCore` is the native API; `World` (facade.rs) wraps it for the
//! browser host. Operations live in the submodules below and are exposed
//! as thin methods here.

use crate::core::math::Rect;
use crate::domain::{Body, BodyId, EngineResult, PairOrder, SimulationConfig};
use crate::systems::{StepCounters, Stepper};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    // Insertion order is iteration order
    bodies: Vec<Body>,
    stepper: Stepper,

    // State
    next_id: u32,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world of the given size centred on the origin, other
    /// settings at their defaults.
    pub fn new(width: f32, height: f32) -> EngineResult<Self> {
        init::create_world_core(SimulationConfig {
            world_width: width,
            world_height: height,
            ..SimulationConfig::default()
        })
    }

    pub fn with_config(config: SimulationConfig) -> EngineResult<Self> {
        init::create_world_core(config)
    }

    pub fn config(&self) -> &SimulationConfig {
        self.stepper.config()
    }

    pub fn world_bounds(&self) -> Rect {
        self.stepper.config().world_bounds()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Add a body and assign it a fresh id
    pub fn add_body(&mut self, body: Body) -> EngineResult<BodyId> {
        commands::add_body(self, body)
    }

    /// Add every body of a JSON `BodyDesc` array. Nothing is added if any
    /// entry is rejected.
    pub fn add_bodies_json(&mut self, json: &str) -> EngineResult<Vec<BodyId>> {
        commands::add_bodies_json(self, json)
    }

    /// Remove a body, keeping the remaining bodies in insertion order
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        commands::remove_body(self, id)
    }

    /// Clear all bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward one fixed tick
    pub fn step(&mut self) -> StepCounters {
        step::step(self)
    }

    /// Counters of the last tick
    pub fn counters(&self) -> StepCounters {
        self.stepper.counters()
    }

    /// `true` selects the quadtree broad phase, `false` the all-pairs path.
    pub fn set_optimization_enabled(&mut self, enabled: bool) {
        settings::set_optimization_enabled(self, enabled);
    }

    pub fn optimization_enabled(&self) -> bool {
        settings::optimization_enabled(self)
    }

    pub fn set_pair_order(&mut self, order: PairOrder) {
        settings::set_pair_order(self, order);
    }

    pub fn set_world_size(&mut self, width: f32, height: f32) -> EngineResult<()> {
        settings::set_world_size(self, width, height)
    }

    pub fn load_config_json(&mut self, json: &str) -> EngineResult<()> {
        settings::load_config_json(self, json)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Index node rectangles and their depth, as of the last quadtree rebuild
    pub fn index_regions(&self) -> Vec<(Rect, u32)> {
        self.stepper.index().regions()
    }

    /// JSON array of `BodySnapshot`s in insertion order
    pub fn snapshot_json(&self) -> EngineResult<String> {
        commands::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
