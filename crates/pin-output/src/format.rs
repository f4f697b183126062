//! Output format selection and default output location.

use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Base name of the default output file.
pub const DEFAULT_OUTPUT_STEM: &str = "PIN_Generated";

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Excel workbook with header and blank-cell highlighting.
    #[default]
    Xlsx,
    /// Plain CSV; highlighting is not representable.
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }

    /// Infer the format from an output path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(OutputError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// `PIN_Generated.<ext>` next to the input file.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let file_name = format!("{DEFAULT_OUTPUT_STEM}.{}", format.extension());
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
