//! Error types for the collision engine.

use thiserror::Error;

/// Errors raised when building bodies, regions or configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Mass must be strictly positive; response divides by it.
    #[error("Invalid mass: {0} (must be > 0)")]
    InvalidMass(f32),

    /// Radius must be strictly positive.
    #[error("Invalid radius: {0} (must be > 0)")]
    InvalidRadius(f32),

    /// A position or velocity component was NaN or infinite.
    #[error("Non-finite {0}")]
    NonFinite(&'static str),

    /// Index regions need a finite, non-negative size.
    #[error("Invalid region: {width}x{height}")]
    InvalidRegion { width: f32, height: f32 },

    /// Every body id has been handed out; `clear` starts over.
    #[error("Body ids exhausted")]
    IdsExhausted,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
