//! Output generation for coded PIN tables.
//!
//! Tables are rendered in memory and then written atomically, so a failed
//! run never leaves a partial file at the output path.

pub mod atomic;
pub mod csv;
pub mod error;
pub mod format;
pub mod style;
pub mod xlsx;

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

pub use atomic::{temp_path_for, write_atomic};
pub use csv::render_csv;
pub use error::{OutputError, Result};
pub use format::{DEFAULT_OUTPUT_STEM, OutputFormat, default_output_path};
pub use style::{BLANK_FILL, HEADER_FILL, HighlightStyle};
pub use xlsx::{MAX_COLUMNS, MAX_ROWS, RenderedWorkbook, SHEET_NAME, render_xlsx};

/// Outcome of [`write_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub rows: usize,
    pub columns: usize,
    /// Data cells filled yellow (XLSX only; zero for CSV).
    pub highlighted_cells: usize,
    pub bytes: usize,
}

/// Render `df` in `format` and write it atomically to `path`.
pub fn write_table(df: &DataFrame, path: &Path, format: OutputFormat) -> Result<WriteReport> {
    let span = info_span!("write_table", path = %path.display(), format = format.extension());
    let _guard = span.enter();
    let start = Instant::now();

    let (bytes, highlighted_cells) = match format {
        OutputFormat::Xlsx => {
            let rendered = render_xlsx(df)?;
            (rendered.bytes, rendered.blank_cells)
        }
        OutputFormat::Csv => (render_csv(df)?, 0),
    };
    write_atomic(path, &bytes)?;

    info!(
        rows = df.height(),
        columns = df.width(),
        highlighted_cells,
        bytes = bytes.len(),
        duration_ms = start.elapsed().as_millis(),
        "output written"
    );
    Ok(WriteReport {
        path: path.to_path_buf(),
        format,
        rows: df.height(),
        columns: df.width(),
        highlighted_cells,
        bytes: bytes.len(),
    })
}
