//! XLSX rendering with header and blank-cell highlighting.

use polars::prelude::{DataFrame, DataType, StringChunked};
use rust_xlsxwriter::{ColNum, RowNum, Workbook};

use pin_model::CellHighlight;

use crate::error::{OutputError, Result};
use crate::style::HighlightStyle;

/// Worksheet written by [`render_xlsx`].
pub const SHEET_NAME: &str = "Sheet1";

/// Excel row limit, header included.
pub const MAX_ROWS: usize = 1_048_576;

/// Excel column limit.
pub const MAX_COLUMNS: usize = 16_384;

/// A rendered workbook and the number of highlighted blank cells.
#[derive(Debug, Clone)]
pub struct RenderedWorkbook {
    pub bytes: Vec<u8>,
    pub blank_cells: usize,
}

/// Render `df` as a single-sheet workbook.
///
/// Every cell is written as text. The header row is filled green and every
/// data cell that is null or blank after trimming is filled yellow.
pub fn render_xlsx(df: &DataFrame) -> Result<RenderedWorkbook> {
    check_limits(df)?;
    let style = HighlightStyle::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let mut blank_cells = 0;
    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = col_idx as ColNum;
        write_cell(sheet, 0, col, Some(column.name().as_str()), &style)?;

        let text = column.cast(&DataType::String)?;
        let values: &StringChunked = text.str()?;
        for (row_idx, value) in values.into_iter().enumerate() {
            let row = row_idx + 1;
            if write_cell(sheet, row as RowNum, col, value, &style)? == CellHighlight::Blank {
                blank_cells += 1;
            }
        }
    }
    sheet.autofit();

    let bytes = workbook.save_to_buffer()?;
    Ok(RenderedWorkbook { bytes, blank_cells })
}

fn write_cell(
    sheet: &mut rust_xlsxwriter::Worksheet,
    row: RowNum,
    col: ColNum,
    value: Option<&str>,
    style: &HighlightStyle,
) -> Result<CellHighlight> {
    let highlight = CellHighlight::classify(row as usize, value);
    match (value, style.format_for(highlight)) {
        (Some(text), Some(format)) => {
            sheet.write_string_with_format(row, col, text, format)?;
        }
        (Some(text), None) => {
            sheet.write_string(row, col, text)?;
        }
        (None, Some(format)) => {
            sheet.write_blank(row, col, format)?;
        }
        (None, None) => {}
    }
    Ok(highlight)
}

fn check_limits(df: &DataFrame) -> Result<()> {
    let rows = df.height() + 1;
    if rows > MAX_ROWS {
        return Err(OutputError::SheetLimit {
            what: "rows",
            count: rows,
            max: MAX_ROWS,
        });
    }
    if df.width() > MAX_COLUMNS {
        return Err(OutputError::SheetLimit {
            what: "columns",
            count: df.width(),
            max: MAX_COLUMNS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn counts_null_and_whitespace_cells() {
        let df = DataFrame::new(vec![
            Series::new("Code".into(), vec![Some("A"), None, Some("  ")]).into_column(),
            Series::new("Other".into(), vec![Some("x"), Some("y"), Some("z")]).into_column(),
        ])
        .unwrap();
        let rendered = render_xlsx(&df).unwrap();
        assert_eq!(rendered.blank_cells, 2);
        // XLSX files are zip archives.
        assert_eq!(&rendered.bytes[..2], b"PK");
    }

    #[test]
    fn empty_frame_renders_header_only() {
        let columns: Vec<Column> =
            vec![Series::new("Code".into(), Vec::<String>::new()).into_column()];
        let df = DataFrame::new(columns).unwrap();
        assert_eq!(render_xlsx(&df).unwrap().blank_cells, 0);
    }
}
