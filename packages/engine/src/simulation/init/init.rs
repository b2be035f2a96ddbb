use tracing::info;

use crate::domain::{EngineResult, SimulationConfig};
use crate::systems::Stepper;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: SimulationConfig) -> EngineResult<WorldCore> {
    info!(
        width = config.world_width,
        height = config.world_height,
        mode = ?config.mode,
        "creating world"
    );
    Ok(WorldCore {
        bodies: Vec::with_capacity(256),
        stepper: Stepper::new(config)?,
        next_id: 1,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
