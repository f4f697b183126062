//! Row assembly and table processing.
//!
//! [`process_table`] validates the input schema, codes every row with
//! [`assemble_row`] and returns the input frame extended with the coded
//! columns, `PIN-Code` and `PIN-Code description`.

pub mod assembler;
pub mod error;
pub mod observer;
pub mod processor;
pub mod schema;
pub mod stats;

pub use assembler::assemble_row;
pub use error::{Result, TransformError};
pub use observer::{NoProgress, ProgressEvent, ProgressObserver, Stage};
pub use processor::{ProcessedTable, process_table};
pub use schema::{ColumnResolution, resolve_columns, stale_derived_columns};
pub use stats::CodingStats;
