//! Cell fills for the coded workbook.

use pin_model::CellHighlight;
use rust_xlsxwriter::{Color, Format};

/// Header row fill (green).
pub const HEADER_FILL: u32 = 0x92D050;

/// Fill for data cells that are null or blank after trimming (yellow).
pub const BLANK_FILL: u32 = 0xFFFF00;

/// Formats applied per [`CellHighlight`].
#[derive(Debug, Clone)]
pub struct HighlightStyle {
    header: Format,
    blank: Format,
}

impl HighlightStyle {
    pub fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_background_color(Color::RGB(HEADER_FILL)),
            blank: Format::new().set_background_color(Color::RGB(BLANK_FILL)),
        }
    }

    /// Format for a classified cell; plain cells are written unformatted.
    pub fn format_for(&self, highlight: CellHighlight) -> Option<&Format> {
        match highlight {
            CellHighlight::Header => Some(&self.header),
            CellHighlight::Blank => Some(&self.blank),
            CellHighlight::Plain => None,
        }
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::new()
    }
}
