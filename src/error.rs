//! Error types for the lookalike library.
//!
//! The pipeline's pure stages (splitting, generation, scoring, ranking) are
//! total over their inputs and return plain values; only emitting results
//! can fail, so the error surface is small.

use std::io;

use thiserror::Error;

/// The error type for fuzzing operations that touch the outside world.
#[derive(Error, Debug)]
pub enum FuzzError {
    /// I/O error writing the persisted sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error for the persisted records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`FuzzError`].
pub type Result<T> = std::result::Result<T, FuzzError>;
