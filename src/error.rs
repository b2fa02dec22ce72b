//! Error types surfaced by the SASA core.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SasaError>;

/// Errors the engine can return.
///
/// There are no retries anywhere in this crate: every failure here is
/// either a caller mistake (`InvalidParameters`, `InvalidInput`) or a
/// deterministic condition that would reproduce on a second attempt
/// (`MemoryExhausted`, `WorkerFailed`).
#[derive(Debug, Error)]
pub enum SasaError {
    /// `r_p <= 0`, `n_slices < 1`, `n_points < 1`, or `n_threads < 1`.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Empty point set, a non-positive radius, or a non-finite coordinate.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Allocation failure while building the cell list, neighbor list, or
    /// per-worker scratch space.
    #[error("memory exhausted while allocating {0}")]
    MemoryExhausted(String),

    /// A worker thread detected an internal invariant violation mid-run.
    #[error("worker thread failed: {0}")]
    WorkerFailed(String),
}
