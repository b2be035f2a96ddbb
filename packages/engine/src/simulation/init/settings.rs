use tracing::info;

use crate::domain::{CollisionMode, EngineResult, PairOrder, SimulationConfig};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_optimization_enabled(world: &mut WorldCore, enabled: bool) {
    let mode = if enabled { CollisionMode::QuadTree } else { CollisionMode::BruteForce };
    world.stepper.set_mode(mode);
}

pub(super) fn optimization_enabled(world: &WorldCore) -> bool {
    world.stepper.config().mode == CollisionMode::QuadTree
}

pub(super) fn set_pair_order(world: &mut WorldCore, order: PairOrder) {
    world.stepper.set_pair_order(order);
}

pub(super) fn set_world_size(world: &mut WorldCore, width: f32, height: f32) -> EngineResult<()> {
    let config = SimulationConfig {
        world_width: width,
        world_height: height,
        ..world.stepper.config().clone()
    };
    world.stepper.reconfigure(config)?;
    info!(width, height, "world resized");
    Ok(())
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> EngineResult<()> {
    let config = SimulationConfig::from_json(json)?;
    info!(?config, "config loaded");
    world.stepper.reconfigure(config)
}
