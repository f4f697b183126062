//! Error types for table processing.

use thiserror::Error;

/// Errors that can occur while coding a table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// One or more required attribute columns are absent from the input.
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The progress observer asked to stop; the partial result is discarded.
    #[error("processing cancelled after {rows_processed} rows")]
    Cancelled { rows_processed: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
