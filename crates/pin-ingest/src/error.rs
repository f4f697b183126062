//! Error types for input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Extension is not a known workbook or CSV extension.
    #[error("unsupported input format '{extension}' for {path} (expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File has no header row.
    #[error("input file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Workbook Errors ===
    /// Failed to open or decode a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// Requested sheet does not exist.
    #[error("sheet '{sheet}' not found in {path} (available: {})", .available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/valves.xlsx"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/valves.xlsx");
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("valves.xlsx"),
            sheet: "Data".to_string(),
            available: vec!["Sheet1".to_string(), "Notes".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Data' not found in valves.xlsx (available: Sheet1, Notes)"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
