//! Error types for the afriscore library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for afriscore operations.
///
/// Per-indicator skips (missing column, no matched values) are not errors;
/// they are reported through [`crate::pipeline::ScoreOutcome`] instead.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to score.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Malformed request, or a request that does not fit the table.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for afriscore operations.
pub type Result<T> = std::result::Result<T, ScoreError>;
