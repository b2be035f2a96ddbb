//! One simulation tick over a caller-owned body slice.
//!
//! Strict order, no interleaving:
//! 1. integrate every moving body and clamp it to the world
//! 2. rebuild the broad phase from the post-bounce positions
//! 3. test candidates and resolve overlaps
//!
//! Bodies are visited in slice order, which the owner keeps equal to
//! insertion order so runs are reproducible.

mod counters;
mod integrate;

use tracing::debug;

use crate::domain::{
    Body, CollisionMode, EngineResult, FlipPolicy, PairOrder, SimulationConfig,
};
use crate::spatial::{BodyHandle, BroadPhase, BruteForce, QuadTree, QuadTreeBroadPhase};
use crate::systems::collision::{pair_mut, resolve_with, test_overlap};

pub use counters::StepCounters;
pub use integrate::{clamp_to_world, clamp_to_world_with, integrate};

pub struct Stepper {
    config: SimulationConfig,
    quadtree: QuadTreeBroadPhase,
    brute_force: BruteForce,
    // Reused across ticks
    pairs: Vec<(usize, usize)>,
    candidates: Vec<BodyHandle>,
    counters: StepCounters,
}

impl Stepper {
    pub fn new(config: SimulationConfig) -> EngineResult<Self> {
        config.validate()?;
        let quadtree = QuadTreeBroadPhase::new(config.world_bounds(), config.limits)?;
        Ok(Self {
            config,
            quadtree,
            brute_force: BruteForce,
            pairs: Vec::new(),
            candidates: Vec::new(),
            counters: StepCounters::default(),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replace the whole configuration. The index root is rebuilt for the
    /// new world rectangle and limits.
    pub fn reconfigure(&mut self, config: SimulationConfig) -> EngineResult<()> {
        config.validate()?;
        self.quadtree = QuadTreeBroadPhase::new(config.world_bounds(), config.limits)?;
        self.config = config;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: CollisionMode) {
        self.config.mode = mode;
        if mode == CollisionMode::BruteForce {
            self.quadtree.reset();
        }
    }

    pub fn set_pair_order(&mut self, order: PairOrder) {
        self.config.pair_order = order;
    }

    /// The index as of the last quadtree rebuild (debug drawing).
    pub fn index(&self) -> &QuadTree {
        self.quadtree.tree()
    }

    pub fn counters(&self) -> StepCounters {
        self.counters
    }

    /// Run one full tick.
    pub fn step(&mut self, bodies: &mut [Body]) -> StepCounters {
        self.integrate_phase(bodies);
        self.broad_phase(bodies);
        self.narrow_phase(bodies);
        self.finish()
    }

    /// Phase 1: move and bounce every body.
    pub(crate) fn integrate_phase(&mut self, bodies: &mut [Body]) {
        self.counters = StepCounters {
            body_count: bodies.len(),
            ..StepCounters::default()
        };

        let dt = self.config.dt;
        let world = self.config.world_bounds();
        let flips = self.config.flip_policy;
        for body in bodies.iter_mut() {
            integrate(body, dt);
            if clamp_to_world_with(body, &world, flips) {
                self.counters.wall_bounces += 1;
            }
        }
    }

    /// Phase 2: rebuild the active broad phase; collect pairs up front in
    /// canonical order.
    pub(crate) fn broad_phase(&mut self, bodies: &[Body]) {
        let bp: &mut dyn BroadPhase = match self.config.mode {
            CollisionMode::QuadTree => &mut self.quadtree,
            CollisionMode::BruteForce => &mut self.brute_force,
        };
        bp.rebuild(bodies);

        match self.config.pair_order {
            PairOrder::Canonical => bp.candidate_pairs(bodies, &mut self.pairs),
            PairOrder::PerBody => self.pairs.clear(),
        }

        if self.config.mode == CollisionMode::QuadTree {
            let tree = self.quadtree.tree();
            self.counters.index_nodes = tree.node_count();
            self.counters.index_depth = tree.depth();
        }
    }

    /// Phase 3: exact test, then resolve. `test_overlap` gates every resolve.
    pub(crate) fn narrow_phase(&mut self, bodies: &mut [Body]) {
        let flips = self.config.flip_policy;
        match self.config.pair_order {
            PairOrder::Canonical => {
                for &(i, j) in self.pairs.iter() {
                    let (a, b) = pair_mut(bodies, i, j);
                    test_and_resolve(a, b, flips, &mut self.counters);
                }
            }
            PairOrder::PerBody => {
                let bp: &dyn BroadPhase = match self.config.mode {
                    CollisionMode::QuadTree => &self.quadtree,
                    CollisionMode::BruteForce => &self.brute_force,
                };
                for i in 0..bodies.len() {
                    self.candidates.clear();
                    bp.candidates_for(bodies, i, &mut self.candidates);
                    for &j in self.candidates.iter() {
                        let (a, b) = pair_mut(bodies, i, j);
                        test_and_resolve(a, b, flips, &mut self.counters);
                    }
                }
            }
        }
    }

    pub(crate) fn finish(&mut self) -> StepCounters {
        let broad = match self.config.mode {
            CollisionMode::QuadTree => self.quadtree.name(),
            CollisionMode::BruteForce => self.brute_force.name(),
        };
        debug!(
            broad,
            bodies = self.counters.body_count,
            tests = self.counters.overlap_tests,
            collisions = self.counters.collisions,
            nodes = self.counters.index_nodes,
            "tick"
        );
        self.counters
    }
}

#[inline]
fn test_and_resolve(
    a: &mut Body,
    b: &mut Body,
    flips: FlipPolicy,
    counters: &mut StepCounters,
) {
    counters.overlap_tests += 1;
    if test_overlap(a, b) {
        counters.collisions += 1;
        if resolve_with(a, b, flips).impulse_applied {
            counters.impulses += 1;
        }
    }
}
