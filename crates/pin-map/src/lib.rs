//! Lookup tables and per-field coding rules.
//!
//! - [`lookup`]: ordered substring lookup with leftmost-longest precedence
//! - [`tables`]: the fixed code tables
//! - [`coder`]: one [`FieldRule`] per coded column, plus the bespoke coders

pub mod coder;
pub mod lookup;
pub mod tables;

pub use coder::{
    FieldRule, PLUG_TYPE_POSITION, TRIM_TYPE_POSITION, body_studs_code, code_field, columns_from,
    extract_after_dash, plug_material_code, rule_for, seat_type_code,
};
pub use lookup::{LookupRule, LookupTable, contains_map};
pub use tables::{lookup_tables, table_for};
