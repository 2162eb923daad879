//! Error types for the ACO engine.

use thiserror::Error;

/// Result type alias for ACO operations.
pub type AcoResult<T> = Result<T, AcoError>;

/// Errors raised while validating input or running the colony.
#[derive(Debug, Error)]
pub enum AcoError {
    /// The distance matrix is not usable as a distance graph.
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// A run parameter is out of its legal range.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// A pheromone entry became NaN or infinite during an update.
    #[error("non-finite pheromone on edge ({from}, {to}) after iteration {iteration}")]
    NonFinitePheromone {
        iteration: usize,
        from: usize,
        to: usize,
    },

    /// A matrix file could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AcoError {
    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        AcoError::InvalidGraph {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        AcoError::InvalidParameters {
            reason: reason.into(),
        }
    }
}
