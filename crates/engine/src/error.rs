//! Error types for the scoring engine.

use peerscore_math::MathError;
use peerscore_traits::ScoreError;

/// Errors that can occur when constructing or running the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Scoring error.
    #[error("scoring error: {0}")]
    Score(#[from] ScoreError),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
