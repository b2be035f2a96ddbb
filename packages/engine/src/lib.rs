//! Quadphys Engine - circle collision simulation in WASM
//!
//! Architecture:
//! - core/       - math and shared utilities
//! - domain/     - bodies, settings, errors
//! - spatial/    - quadtree and broad phase
//! - systems/    - narrow phase and the tick driver
//! - simulation/ - world orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel broad phase
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Quadphys WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Rect, Vec2};
pub use domain::{
    Body, BodyDesc, BodyId, CollisionMode, EngineError, EngineResult, FlipPolicy, PairOrder,
    SimulationConfig,
};
pub use simulation::{PerfStats, World, WorldCore};
pub use spatial::{BroadPhase, BruteForce, QuadTree, QuadTreeBroadPhase};
pub use systems::{StepCounters, Stepper};
