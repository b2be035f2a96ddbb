use serde::Serialize;

/// Per-tick diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepCounters {
    /// Bodies simulated this tick
    pub body_count: usize,
    /// Exact circle tests performed
    pub overlap_tests: usize,
    /// Tests that found an overlap (each one was resolved)
    pub collisions: usize,
    /// Resolutions that changed a velocity
    pub impulses: usize,
    /// Bodies clamped against a wall
    pub wall_bounces: usize,
    /// Index nodes after the rebuild (0 in brute-force mode)
    pub index_nodes: usize,
    pub index_depth: u32,
}
