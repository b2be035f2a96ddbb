//! Millisecond clock for perf stats. `std::time::Instant` panics on
//! wasm32-unknown-unknown, so the browser clock stands in there.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Phase stopwatch: `lap_ms` reads the time since the last lap and restarts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_ms: f64,
    lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { started_ms: now, lap_ms: now }
    }

    /// Time since `start`. The browser clock can step backwards, so this
    /// never goes below zero.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }

    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = (now - self.lap_ms).max(0.0);
        self.lap_ms = now;
        lap
    }
}
