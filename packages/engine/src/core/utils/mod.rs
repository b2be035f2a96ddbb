//! Small shared helpers.

pub mod random;
