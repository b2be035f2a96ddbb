//! Spatial partitioning and candidate-pair generation.

pub mod broad_phase;
pub mod quadtree;

pub use broad_phase::{BroadPhase, BruteForce, QuadTreeBroadPhase};
pub use quadtree::{BodyHandle, QuadTree, QuadTreeLimits, Quadrant};
