//! PIN code data model.
//!
//! Defines the attribute columns read from the input sheet, the coded
//! columns derived from them, and the per-row record produced by the
//! row assembler.

pub mod attribute;
pub mod cell;
pub mod record;

pub use attribute::{
    Attribute, CODE_SUFFIX, CodedColumn, DESCRIPTION_SEPARATOR, PIN_CODE_COLUMN,
    PIN_DESCRIPTION_COLUMN, derived_headers,
};
pub use cell::{CellHighlight, is_blank};
pub use record::{AttributeValues, PinRecord};
