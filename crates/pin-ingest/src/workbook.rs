//! Workbook input read with calamine.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::csv::{MAX_INPUT_FILE_SIZE, check_file_size};
use crate::error::{IngestError, Result};

/// Sheet names of a workbook, in workbook order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(workbook.sheet_names())
}

/// Read one worksheet into an all-string DataFrame.
///
/// The first row is the header. `sheet` selects a worksheet by name; the
/// first sheet is used otherwise. Returns the frame and the sheet name read.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<(DataFrame, String)> {
    check_file_size(path, MAX_INPUT_FILE_SIZE)?;

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let available = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => available
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.to_string(),
                available: available.clone(),
            })?,
        None => available
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoSheets {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet '{sheet_name}': {e}"),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let headers = dedupe_headers(header_row.iter().map(cell_text));

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    let mut skipped = 0usize;
    for row in rows {
        let values: Vec<Option<String>> = row.iter().map(cell_text).collect();
        if values.iter().all(Option::is_none) {
            skipped += 1;
            continue;
        }
        for (idx, column) in columns.iter_mut().enumerate() {
            column.push(values.get(idx).cloned().flatten());
        }
    }
    if skipped > 0 {
        tracing::info!(sheet = %sheet_name, skipped, "empty rows skipped");
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = df.height(),
        columns = df.width(),
        "worksheet loaded"
    );
    Ok((df, sheet_name))
}

/// Text of one cell; `None` for empty and error cells.
///
/// Whole-number floats are written without a fractional part, so a size
/// typed as `12` reads back as `"12"` rather than `"12.0"`.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => {
            if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                Some((*value as i64).to_string())
            } else {
                Some(value.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

/// Make header names unique and non-empty.
///
/// Empty headers become `Unnamed: <index>`; repeats of a name get `.1`, `.2`
/// suffixes in order of appearance, skipping any suffix already taken by
/// another header.
pub fn dedupe_headers(headers: impl IntoIterator<Item = Option<String>>) -> Vec<String> {
    let headers: Vec<String> = headers
        .into_iter()
        .enumerate()
        .map(|(idx, header)| match header {
            Some(text) if !text.trim().is_empty() => text,
            _ => format!("Unnamed: {idx}"),
        })
        .collect();
    let mut taken: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(headers.len());
    for base in headers {
        let mut name = base.clone();
        if taken.contains(&name) {
            let count = counts.entry(base.clone()).or_insert(0);
            loop {
                *count += 1;
                name = format!("{base}.{count}");
                if !taken.contains(&name) {
                    break;
                }
            }
        }
        taken.insert(name.clone());
        names.push(name);
    }
    names
}
