//! Error types for the scoring and scenario engine.
//!
//! All four kinds are local-contract violations surfaced at the engine's API
//! boundary; the engine performs no retries and has no partial-failure mode.
//! Numeric aggregation elsewhere is total and uses sentinel values instead
//! of propagating NaN or infinity.

use crate::core::Dimension;
use thiserror::Error;

/// Contract violations surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A raw answer code outside [1, 5], or a dimension score outside
    /// [1, 10] where clamping should have made that unreachable.
    #[error("invalid input for {dimension}: {message}")]
    InvalidInput {
        dimension: Dimension,
        message: String,
    },

    /// Archetype id missing from the profile registry. The calculator
    /// recovers with a logged default baseline; strict accessors return this.
    #[error("no profile registered for archetype: {0}")]
    UnknownArchetype(String),

    /// A scenario referenced an action id absent from the catalog. This is a
    /// programming error in the caller and fails loudly.
    #[error("improvement action not found in catalog: {0}")]
    ActionNotFound(String),

    /// Scenario comparison requested with zero scenarios.
    #[error("scenario comparison requires at least one scenario")]
    EmptyInput,
}

impl EngineError {
    /// Invalid raw answer code for a dimension.
    pub fn invalid_code(dimension: Dimension, code: u8) -> Self {
        Self::InvalidInput {
            dimension,
            message: format!("answer code {code} must be between 1 and 5"),
        }
    }

    /// Dimension score escaped the [1, 10] clamp; treated as an assertion
    /// failure at the calculator boundary.
    pub fn score_out_of_range(dimension: Dimension, score: f64) -> Self {
        Self::InvalidInput {
            dimension,
            message: format!("dimension score {score} must be between 1 and 10"),
        }
    }

    pub fn unknown_archetype(name: impl Into<String>) -> Self {
        Self::UnknownArchetype(name.into())
    }

    pub fn action_not_found(id: impl Into<String>) -> Self {
        Self::ActionNotFound(id.into())
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
