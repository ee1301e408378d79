//! Error types for Extrema

use thiserror::Error;

/// Main error type for search and benchmark operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtremaError {
    /// Iterative search was given a zero-length sequence
    #[error("Cannot search an empty sequence")]
    EmptyInput,

    /// Recursive search was given an out-of-bounds or inverted range
    #[error("Invalid range [{low}, {high}] for sequence of length {len}")]
    InvalidRange {
        low: usize,
        high: usize,
        len: usize,
    },

    /// Benchmark or comparison configuration violates its constraints
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Benchmark sweep was cancelled before completion
    #[error("Benchmark was cancelled")]
    Cancelled,
}

impl ExtremaError {
    /// Shorthand for building an [`ExtremaError::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias for Extrema operations
pub type Result<T> = std::result::Result<T, ExtremaError>;
