//! Input format detection.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Kind of input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Spreadsheet workbook read with calamine (`.xlsx`, `.xlsm`, `.xlsb`,
    /// `.xls`, `.ods`).
    Workbook,
    /// Comma-separated text with a header row.
    Csv,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Workbook => f.write_str("workbook"),
            InputFormat::Csv => f.write_str("csv"),
        }
    }
}
