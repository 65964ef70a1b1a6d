use thiserror::Error;

/// Errors produced by SBM graph generation.
///
/// Bad caller input is reported as [`SbmError::InvalidParameter`] or
/// [`SbmError::DimensionMismatch`] before any sampling begins, so no
/// partial graph is ever produced. [`SbmError::InternalInvariantViolation`]
/// means the combinatorial indexing broke its own contract and indicates a
/// bug, never bad input.
#[derive(Debug, Error)]
pub enum SbmError {
    /// A parameter is outside its legal range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Cluster list and probability matrix disagree on the number of clusters
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A candidate rank or sample size escaped its valid range
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}
