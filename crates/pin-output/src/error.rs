//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an output table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error during a file operation.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rename of the temporary file onto the target failed.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook generation failed.
    #[error("failed to build workbook: {message}")]
    Xlsx { message: String },

    /// The table does not fit in one worksheet.
    #[error("{count} {what} exceed the worksheet limit of {max}")]
    SheetLimit {
        what: &'static str,
        count: usize,
        max: usize,
    },

    /// Output extension is not `.xlsx` or `.csv`.
    #[error("unsupported output format '{extension}' for {path} (expected .xlsx or .csv)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for OutputError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Xlsx {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
