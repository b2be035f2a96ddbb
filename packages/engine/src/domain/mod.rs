//! Domain types: bodies, settings and errors.

pub mod body;
pub mod config;
pub mod error;

pub use body::{Body, BodyDesc, BodyId, BodySnapshot};
pub use config::{CollisionMode, FlipPolicy, PairOrder, SimulationConfig};
pub use error::{EngineError, EngineResult};
