//! Per-column coding counts for the run summary.

use pin_model::{CodedColumn, PinRecord};

/// How many cells of each coded column were filled or left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodingStats {
    rows: usize,
    blank: [usize; CodedColumn::COUNT],
    incomplete_rows: usize,
}

impl CodingStats {
    pub fn record(&mut self, record: &PinRecord) {
        self.rows += 1;
        for (column, _) in record.codes() {
            if record.is_code_blank(column) {
                self.blank[column.index()] += 1;
            }
        }
        if record.blank_pin_positions() > 0 {
            self.incomplete_rows += 1;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn blank(&self, column: CodedColumn) -> usize {
        self.blank[column.index()]
    }

    pub fn coded(&self, column: CodedColumn) -> usize {
        self.rows - self.blank(column)
    }

    /// Blank coded cells across all columns.
    pub fn total_blank(&self) -> usize {
        self.blank.iter().sum()
    }

    /// Rows with at least one blank codable PIN position.
    pub fn incomplete_rows(&self) -> usize {
        self.incomplete_rows
    }
}
