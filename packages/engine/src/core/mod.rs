pub mod math;
pub mod utils;
