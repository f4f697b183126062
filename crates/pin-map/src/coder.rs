//! Field coder: one rule per coded column.
//!
//! Every function here is total. Malformed, missing or unmapped input yields
//! the rule's default (usually the empty string) instead of an error.

use std::borrow::Cow;

use pin_model::{Attribute, AttributeValues, CodedColumn};

use crate::lookup::LookupTable;
use crate::tables;

/// Character position of the plug type letter after the model number dash.
pub const PLUG_TYPE_POSITION: usize = 2;

/// Character position of the trim type letter after the model number dash.
pub const TRIM_TYPE_POSITION: usize = 3;

/// Body studs: `"2"` for coated studs, `"1"` otherwise (including missing).
pub fn body_studs_code(value: Option<&str>) -> &'static str {
    match value {
        Some(text) if text.to_lowercase().contains("coat") => "2",
        _ => "1",
    }
}

/// Plug material grade.
///
/// Hardened 316 must be checked before plain 316.
pub fn plug_material_code(value: Option<&str>) -> &'static str {
    let Some(text) = value else {
        return "";
    };
    if text.contains("316") && (text.contains("Hard") || text.contains("HF")) {
        "1"
    } else if text.contains("316") {
        "2"
    } else if text.contains("410") {
        "3"
    } else if text.contains("CA6NM") {
        "4"
    } else {
        ""
    }
}

/// Single character at `position` of the text following the first `-`.
///
/// Positions count characters, not bytes. Missing input, no dash, or a
/// remainder too short yields an empty string.
pub fn extract_after_dash(value: Option<&str>, position: usize) -> String {
    value
        .and_then(|text| text.split_once('-'))
        .and_then(|(_, rest)| rest.chars().nth(position))
        .map(String::from)
        .unwrap_or_default()
}

/// Seat type position; reserved and always empty.
pub fn seat_type_code() -> &'static str {
    ""
}

/// How one coded column is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Ordered substring lookup against a fixed table.
    Lookup(&'static LookupTable),
    /// Coated vs. plain studs.
    BodyStuds,
    /// Ordered plug material classification.
    PlugMaterial,
    /// Positional character after the first dash of the source value.
    AfterDash { position: usize },
    /// Position kept for future use; always empty.
    Reserved,
}

impl FieldRule {
    /// Apply the rule to one raw value of the column's source attribute.
    pub fn apply(&self, value: Option<&str>) -> Cow<'static, str> {
        match self {
            FieldRule::Lookup(table) => Cow::Borrowed(table.lookup(value)),
            FieldRule::BodyStuds => Cow::Borrowed(body_studs_code(value)),
            FieldRule::PlugMaterial => Cow::Borrowed(plug_material_code(value)),
            FieldRule::AfterDash { position } => Cow::Owned(extract_after_dash(value, *position)),
            FieldRule::Reserved => Cow::Borrowed(seat_type_code()),
        }
    }

    /// Short human-readable description, used by the `rules` command.
    pub fn describe(&self) -> String {
        match self {
            FieldRule::Lookup(table) => {
                let default = table.default_code();
                if default.is_empty() {
                    format!("lookup ({} rules)", table.rules().len())
                } else {
                    format!("lookup ({} rules, default {default})", table.rules().len())
                }
            }
            FieldRule::BodyStuds => "2 if text contains \"coat\" (any case), else 1".to_string(),
            FieldRule::PlugMaterial => {
                "316+Hard/HF -> 1, 316 -> 2, 410 -> 3, CA6NM -> 4, else blank".to_string()
            }
            FieldRule::AfterDash { position } => {
                format!("character {position} after the first dash")
            }
            FieldRule::Reserved => "reserved, always blank".to_string(),
        }
    }
}

/// The rule computing `column`.
pub fn rule_for(column: CodedColumn) -> FieldRule {
    match column {
        CodedColumn::ModelNumber => FieldRule::Lookup(&tables::MODEL_NUMBER),
        CodedColumn::Size => FieldRule::Lookup(&tables::SIZE),
        CodedColumn::RatingClass => FieldRule::Lookup(&tables::RATING_CLASS),
        CodedColumn::EndConnection => FieldRule::Lookup(&tables::END_CONNECTION),
        CodedColumn::BodyMaterial => FieldRule::Lookup(&tables::BODY_MATERIAL),
        CodedColumn::BodyStuds => FieldRule::BodyStuds,
        CodedColumn::BonnetType => FieldRule::Lookup(&tables::BONNET_TYPE),
        CodedColumn::ActuatorModel => FieldRule::Lookup(&tables::ACTUATOR_MODEL),
        CodedColumn::ActuatorSize => FieldRule::Lookup(&tables::ACTUATOR_SIZE),
        CodedColumn::PlugMaterial => FieldRule::PlugMaterial,
        CodedColumn::PlugType => FieldRule::AfterDash {
            position: PLUG_TYPE_POSITION,
        },
        CodedColumn::TrimType => FieldRule::AfterDash {
            position: TRIM_TYPE_POSITION,
        },
        CodedColumn::SeatType => FieldRule::Reserved,
        CodedColumn::TrimCharacteristic => FieldRule::Lookup(&tables::TRIM_CHARACTERISTIC),
    }
}

/// Code one column of a row.
pub fn code_field(column: CodedColumn, row: &AttributeValues<'_>) -> Cow<'static, str> {
    rule_for(column).apply(row.get(column.source()))
}

/// Coded columns computed from `attribute`'s raw value.
pub fn columns_from(attribute: Attribute) -> impl Iterator<Item = CodedColumn> {
    CodedColumn::ALL
        .into_iter()
        .filter(move |column| column.source() == attribute)
}
