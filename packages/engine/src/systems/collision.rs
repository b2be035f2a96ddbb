//! Narrow phase: exact circle test and impulse response.
//!
//! Collisions are instantaneous, frictionless and perfectly elastic along the
//! contact normal. Static bodies deflect others but are never moved.

mod detection;
mod resolution;

pub use detection::{penetration, test_overlap};
pub use resolution::{pair_mut, resolve, resolve_with, ResolveOutcome};
