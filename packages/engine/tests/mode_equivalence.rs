//! The quadtree and the all-pairs path must produce the same simulation.

use approx::assert_relative_eq;
use quadphys_engine::core::utils::random::XorShift32;
use quadphys_engine::{Body, CollisionMode, SimulationConfig, Stepper, Vec2};

const BODIES: usize = 200;
const TICKS: usize = 100;

fn scene(seed: u32) -> Vec<Body> {
    let mut rng = XorShift32::new(seed);
    (0..BODIES)
        .map(|i| {
            let p = Vec2::new(rng.range(-9.5, 9.5), rng.range(-9.5, 9.5));
            let r = rng.range(0.2, 0.5);
            if i % 25 == 0 {
                Body::new_static(p, 10.0, r).unwrap()
            } else {
                let speed = rng.range(1.0, 5.0);
                let angle = rng.range(0.0, std::f32::consts::TAU);
                let v = Vec2::new(angle.cos() * speed, angle.sin() * speed);
                Body::new_dynamic(p, v, rng.range(0.5, 2.0), r).unwrap()
            }
        })
        .collect()
}

fn run(mode: CollisionMode, seed: u32, ticks: usize) -> (Vec<Body>, usize, usize) {
    // Default 20x20 arena: 200 bodies keep it crowded.
    let config = SimulationConfig { mode, ..SimulationConfig::default() };
    let mut stepper = Stepper::new(config).unwrap();
    let mut bodies = scene(seed);
    let mut tests = 0;
    let mut collisions = 0;
    for _ in 0..ticks {
        let counters = stepper.step(&mut bodies);
        tests += counters.overlap_tests;
        collisions += counters.collisions;
    }
    (bodies, tests, collisions)
}

#[test]
fn quadtree_matches_brute_force() {
    for seed in [1, 42, 9001] {
        for ticks in [1, 5, TICKS] {
            let (tree, tree_tests, tree_hits) = run(CollisionMode::QuadTree, seed, ticks);
            let (brute, brute_tests, brute_hits) = run(CollisionMode::BruteForce, seed, ticks);

            assert_eq!(tree_hits, brute_hits, "seed {seed}, {ticks} ticks");
            assert!(tree_tests < brute_tests, "seed {seed}, {ticks} ticks");
            assert_same_state(&tree, &brute);
        }
    }
}

fn assert_same_state(tree: &[Body], brute: &[Body]) {
    assert_eq!(tree.len(), brute.len());
    for (a, b) in tree.iter().zip(brute.iter()) {
        assert_relative_eq!(a.position.x, b.position.x, epsilon = 1e-4);
        assert_relative_eq!(a.position.y, b.position.y, epsilon = 1e-4);
        assert_relative_eq!(a.velocity.x, b.velocity.x, epsilon = 1e-4);
        assert_relative_eq!(a.velocity.y, b.velocity.y, epsilon = 1e-4);
    }
}

#[test]
fn brute_force_tests_every_pair_each_tick() {
    let (_, tests, _) = run(CollisionMode::BruteForce, 7, TICKS);
    assert_eq!(tests, TICKS * BODIES * (BODIES - 1) / 2);
}
