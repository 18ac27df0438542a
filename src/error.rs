//! Error types for u-hillclimb.
//!
//! The search engines themselves are infallible. Errors come from building
//! problem instances and from validating candidate solutions against them.

use thiserror::Error;

/// Error type for problem construction and solution validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProblemError {
    /// A vector did not have the length the instance expects
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The instance has no items
    #[error("Problem instance is empty")]
    EmptyInstance,

    /// A binary solution contained something other than 0 or 1
    #[error("Non-binary gene {value} at position {position}")]
    NonBinaryGene { position: usize, value: u8 },

    /// A numeric parameter was out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A route is not a permutation of the cities to visit
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}
