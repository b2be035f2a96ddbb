//! Broad phase: cheap candidate generation ahead of the exact circle test.
//!
//! Both implementations feed the same narrow phase. Pairs are reported as
//! `(lo, hi)` slice indices, sorted ascending and unique, so the narrow phase
//! visits them in the same order whichever broad phase produced them.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Rect;
use crate::domain::{Body, EngineResult};

use super::quadtree::{BodyHandle, QuadTree, QuadTreeLimits};

pub trait BroadPhase {
    /// Rebuild acceleration state from the current body positions.
    fn rebuild(&mut self, bodies: &[Body]);

    /// Candidates for body `index`, in visiting order, excluding `index`.
    fn candidates_for(&self, bodies: &[Body], index: usize, out: &mut Vec<BodyHandle>);

    /// Canonical candidate pairs for the whole body set.
    fn candidate_pairs(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>);

    fn name(&self) -> &'static str;
}

#[inline]
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// All-pairs reference path. O(n²) but trivially complete.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl BroadPhase for BruteForce {
    fn rebuild(&mut self, _bodies: &[Body]) {}

    /// Only later bodies: each unordered pair is visited once.
    fn candidates_for(&self, bodies: &[Body], index: usize, out: &mut Vec<BodyHandle>) {
        out.extend(index + 1..bodies.len());
    }

    fn candidate_pairs(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
        out.clear();
        let n = bodies.len();
        out.reserve(n.saturating_mul(n.saturating_sub(1)) / 2);
        for i in 0..n {
            for j in i + 1..n {
                out.push((i, j));
            }
        }
    }

    fn name(&self) -> &'static str {
        "brute_force"
    }
}

/// Quadtree broad phase, rebuilt from scratch each tick.
#[derive(Clone, Debug)]
pub struct QuadTreeBroadPhase {
    tree: QuadTree,
    // Body count of the last rebuild; handles index that slice.
    built_for: Option<usize>,
}

impl QuadTreeBroadPhase {
    pub fn new(world: Rect, limits: QuadTreeLimits) -> EngineResult<Self> {
        Ok(Self {
            tree: QuadTree::with_limits(0, world, limits)?,
            built_for: None,
        })
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    /// Empty the tree and forget the last rebuild.
    pub fn reset(&mut self) {
        self.tree.clear();
        self.built_for = None;
    }

    fn check_built(&self, bodies: &[Body]) {
        assert_eq!(
            self.built_for,
            Some(bodies.len()),
            "quadtree queried without a rebuild for this body set"
        );
    }
}

impl BroadPhase for QuadTreeBroadPhase {
    fn rebuild(&mut self, bodies: &[Body]) {
        self.tree.clear();
        for (i, body) in bodies.iter().enumerate() {
            self.tree.insert(i, body.bounds());
        }
        self.built_for = Some(bodies.len());
    }

    /// Retrieval may list a neighbour that is also visited from the other
    /// side; per-body resolution sees such pairs twice.
    fn candidates_for(&self, bodies: &[Body], index: usize, out: &mut Vec<BodyHandle>) {
        self.check_built(bodies);
        let start = out.len();
        self.tree.retrieve(out, &bodies[index].bounds());
        // Drop self without disturbing the retrieval order of the rest.
        let mut k = start;
        while k < out.len() {
            if out[k] == index {
                out.remove(k);
            } else {
                k += 1;
            }
        }
    }

    fn candidate_pairs(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
        self.check_built(bodies);
        out.clear();

        // The tree is read-only from here on; per-body retrieval is
        // independent and can fan out.
        #[cfg(feature = "parallel")]
        {
            let tree = &self.tree;
            out.par_extend(bodies.par_iter().enumerate().flat_map_iter(|(i, body)| {
                let mut found = Vec::new();
                tree.retrieve(&mut found, &body.bounds());
                found
                    .into_iter()
                    .filter(move |&j| j != i)
                    .map(move |j| ordered(i, j))
            }));
        }

        #[cfg(not(feature = "parallel"))]
        {
            let mut found = Vec::new();
            for (i, body) in bodies.iter().enumerate() {
                found.clear();
                self.tree.retrieve(&mut found, &body.bounds());
                out.extend(found.iter().filter(|&&j| j != i).map(|&j| ordered(i, j)));
            }
        }

        out.sort_unstable();
        out.dedup();
    }

    fn name(&self) -> &'static str {
        "quadtree"
    }
}
