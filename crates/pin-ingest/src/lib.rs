//! Input loading for PIN code generation.
//!
//! Workbooks are read with calamine and CSV files with polars. Either way the
//! result is a DataFrame of nullable string columns whose names are the
//! header row as written (deduplicated, never empty).

pub mod csv;
pub mod error;
pub mod format;
pub mod workbook;

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

pub use csv::{MAX_INPUT_FILE_SIZE, check_file_size, read_csv, validate_encoding};
pub use error::{IngestError, Result};
pub use format::InputFormat;
pub use workbook::{cell_text, dedupe_headers, read_workbook, sheet_names};

/// Options for [`read_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Worksheet to read; the first sheet when `None`. Ignored for CSV.
    pub sheet: Option<String>,
}

impl ReadOptions {
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}

/// A loaded input table with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub frame: DataFrame,
    pub source: PathBuf,
    pub format: InputFormat,
    /// Worksheet the frame was read from (workbooks only).
    pub sheet: Option<String>,
}

/// Load `path` as a table, dispatching on its extension.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<LoadedTable> {
    let format = InputFormat::from_path(path)?;
    let span = tracing::info_span!("read_table", path = %path.display(), format = %format);
    let _guard = span.enter();
    let start = std::time::Instant::now();

    let (frame, sheet) = match format {
        InputFormat::Workbook => {
            let (frame, sheet) = read_workbook(path, options.sheet.as_deref())?;
            (frame, Some(sheet))
        }
        InputFormat::Csv => {
            if let Some(sheet) = &options.sheet {
                tracing::warn!(sheet = %sheet, "sheet selection ignored for CSV input");
            }
            (read_csv(path)?, None)
        }
    };

    tracing::info!(
        rows = frame.height(),
        columns = frame.width(),
        duration_ms = start.elapsed().as_millis(),
        "input loaded"
    );
    Ok(LoadedTable {
        frame,
        source: path.to_path_buf(),
        format,
        sheet,
    })
}
