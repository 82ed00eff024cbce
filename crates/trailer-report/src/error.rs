//! Error types for report export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Creating an output directory or file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building or writing a DataFrame failed.
    #[error("DataFrame operation failed: {message}")]
    Polars { message: String },

    /// Serializing the JSON report failed.
    #[error("failed to serialize report {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Polars {
            message: err.to_string(),
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ReportError>;
