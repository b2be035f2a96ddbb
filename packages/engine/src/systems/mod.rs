//! Per-tick systems: narrow phase and the step driver.

pub mod collision;
pub mod step;

pub use step::{StepCounters, Stepper};
