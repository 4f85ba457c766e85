//! Error types for TargetSeek

use thiserror::Error;

/// Main error type for TargetSeek operations.
///
/// A search that completes without finding a match is *not* an error;
/// solvers express it as `Ok(None)`. These variants cover inputs that
/// cannot be searched at all.
#[derive(Debug, Error)]
pub enum SeekError {
    /// Input data is malformed (non-finite values, non-numeric cells,
    /// values that cannot be quantized at the configured scale).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input exceeds a configured bound (value count, DP table size,
    /// or search node budget).
    #[error("Size limit exceeded: {0}")]
    SizeLimitExceeded(String),

    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for TargetSeek operations
pub type Result<T> = std::result::Result<T, SeekError>;
