use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pin_model::CodedColumn;

use crate::pipeline::GenerateResult;

/// Coded and blank cell counts for one coded column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub column: &'static str,
    pub in_pin: bool,
    pub coded: usize,
    pub blank: usize,
}

/// Per-column counts in output column order.
pub fn summary_rows(result: &GenerateResult) -> Vec<SummaryRow> {
    CodedColumn::ALL
        .into_iter()
        .map(|column| SummaryRow {
            column: column.header(),
            in_pin: column.in_pin(),
            coded: result.stats.coded(column),
            blank: result.stats.blank(column),
        })
        .collect()
}

pub fn print_summary(result: &GenerateResult) {
    println!("Input: {}", result.input.display());
    if let Some(sheet) = &result.sheet {
        println!("Sheet: {sheet}");
    }
    match &result.output {
        Some(report) => println!(
            "Output: {} ({} rows, {} highlighted cells)",
            report.path.display(),
            report.rows,
            report.highlighted_cells
        ),
        None => println!("Output: {} (dry run, not written)", result.output_path.display()),
    }
    if !result.replaced_columns.is_empty() {
        println!("Replaced columns: {}", result.replaced_columns.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Coded column"),
        header_cell("PIN"),
        header_cell("Coded"),
        header_cell("Blank"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let rows = summary_rows(result);
    for row in &rows {
        table.add_row(vec![
            Cell::new(row.column),
            if row.in_pin {
                Cell::new("yes")
            } else {
                dim_cell("no")
            },
            Cell::new(row.coded),
            count_cell(row.blank, Color::Yellow),
        ]);
    }
    let total_coded: usize = rows.iter().map(|row| row.coded).sum();
    table.add_row(vec![
        Cell::new(format!("TOTAL ({} rows)", result.rows))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_coded).add_attribute(Attribute::Bold),
        count_cell(result.stats.total_blank(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let incomplete = result.stats.incomplete_rows();
    if incomplete > 0 {
        println!("{incomplete} of {} rows have at least one blank PIN position", result.rows);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

/// Compact style shared by the `rules` and `code` listings.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
