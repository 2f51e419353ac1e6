//! Failure taxonomy for the solver: usage errors, malformed input, and
//! resource exhaustion during the DFS search. `NoSolution` is deliberately
//! *not* a variant here: it is reported on the normal output channel, not
//! treated as a failure (see `crate::SolveReport`).

use thiserror::Error;

/// Errors that can terminate the whole computation before a result is
/// produced.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Wrong argument count or an unreadable input file.
    #[error("usage error: {0}")]
    Usage(String),

    /// The declared city count or the integer count in the distance file
    /// matches neither the full-matrix nor the lower-triangle layout.
    #[error("malformed distance matrix: {0}")]
    MalformedMatrix(String),

    /// A DFS stack could not grow to hold the next node. Fatal to the whole
    /// computation; no partial result is emitted.
    #[error("DFS stack exhausted available memory")]
    ResourceExhausted,
}

pub type Result<T> = std::result::Result<T, SolverError>;
