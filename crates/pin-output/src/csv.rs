//! CSV rendering.

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::Result;

/// Render `df` as CSV with a header row. Nulls are written as empty fields.
pub fn render_csv(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut frame = df.clone();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(buffer)
}
