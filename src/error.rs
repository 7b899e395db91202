//! Error type shared by the soft heap and the selection configuration

use thiserror::Error;

/// Error type for soft heap and selection operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoftHeapError {
    /// `extract_min` was called on a heap with no elements
    #[error("cannot extract from an empty soft heap")]
    Empty,
    /// The error bound is not strictly between 0 and 1
    #[error("error bound must lie strictly between 0 and 1, got {0}")]
    InvalidEpsilon(f64),
    /// Selection needs an error bound below one half
    #[error("selection error bound must be below 0.5, got {0}")]
    SelectEpsilonTooLarge(f64),
    /// A structural check in `verify_invariants` failed
    #[error("soft heap invariant violated: {0}")]
    InvariantViolated(String),
}
