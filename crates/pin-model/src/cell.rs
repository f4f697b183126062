//! Per-cell emptiness and highlight classification.

use serde::{Deserialize, Serialize};

/// Returns true when a cell is null or contains only whitespace.
///
/// A blank coded cell means the attribute could not be coded; the output
/// highlights it so the row can be reviewed.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

/// Highlight applied to a written cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellHighlight {
    /// Header row cell.
    Header,
    /// Data cell that is null or blank after trimming.
    Blank,
    /// Data cell with content; written unstyled.
    Plain,
}

impl CellHighlight {
    /// Classify a cell by sheet row (0 is the header) and value.
    pub fn classify(row: usize, value: Option<&str>) -> Self {
        if row == 0 {
            CellHighlight::Header
        } else if is_blank(value) {
            CellHighlight::Blank
        } else {
            CellHighlight::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t")));
        assert!(!is_blank(Some("0")));
        assert!(!is_blank(Some(" A ")));
    }

    #[test]
    fn header_row_wins_over_blank() {
        assert_eq!(CellHighlight::classify(0, None), CellHighlight::Header);
        assert_eq!(CellHighlight::classify(3, Some(" ")), CellHighlight::Blank);
        assert_eq!(CellHighlight::classify(3, Some("RF")), CellHighlight::Plain);
    }
}
