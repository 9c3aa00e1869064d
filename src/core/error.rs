//! Error types for the terrain editing core

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// A grid coordinate fell outside the grid extent. Signals a caller or
    /// mapping bug; grid accessors never clamp silently.
    #[error("grid coordinate ({x}, {z}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        z: i64,
        width: usize,
        height: usize,
    },

    /// A material layer index outside `[0, layer_count)`.
    #[error("layer {layer} out of range for {layer_count} material layers")]
    InvalidLayer { layer: usize, layer_count: usize },

    /// A per-cell numeric invariant (weight sum, slice length) did not hold.
    /// Treated as a programming-error-class failure, not a recoverable one.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Persisted grid dimensions differ from the live terrain. Recoverable by
    /// rejecting the load and keeping the current terrain.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: String, found: String },

    /// Clone source or terrain template missing or degenerate.
    #[error("terrain source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
