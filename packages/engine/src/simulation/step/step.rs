use crate::systems::StepCounters;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) -> StepCounters {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // === INTEGRATE + WALLS ===
    if let Some(t) = timer.as_mut() {
        world.stepper.integrate_phase(&mut world.bodies);
        world.perf_stats.integrate_ms = t.lap_ms();
    } else {
        world.stepper.integrate_phase(&mut world.bodies);
    }

    // === BROAD PHASE ===
    // Rebuilt from post-bounce positions, read-only from here on.
    if let Some(t) = timer.as_mut() {
        world.stepper.broad_phase(&world.bodies);
        world.perf_stats.broad_ms = t.lap_ms();
    } else {
        world.stepper.broad_phase(&world.bodies);
    }

    // === NARROW PHASE ===
    if let Some(t) = timer.as_mut() {
        world.stepper.narrow_phase(&mut world.bodies);
        world.perf_stats.narrow_ms = t.lap_ms();
    } else {
        world.stepper.narrow_phase(&mut world.bodies);
    }

    let counters = world.stepper.finish();
    world.frame += 1;

    if let Some(t) = timer {
        world.perf_stats.step_ms = t.elapsed_ms();
        world.perf_stats.record_counters(&counters);
    }
    counters
}
