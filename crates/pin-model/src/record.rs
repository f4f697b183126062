//! Per-row raw values and the coded record assembled from them.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, CodedColumn};
use crate::cell::is_blank;

/// Raw attribute values of one input row, borrowed from the source table.
///
/// A `None` entry is a null cell or a column that is absent from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeValues<'a> {
    values: [Option<&'a str>; Attribute::COUNT],
}

impl<'a> AttributeValues<'a> {
    /// Create a row with every attribute missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly used by tests and the `code` command.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: &'a str) -> Self {
        self.set(attribute, Some(value));
        self
    }

    pub fn set(&mut self, attribute: Attribute, value: Option<&'a str>) {
        self.values[attribute.index()] = value;
    }

    pub fn get(&self, attribute: Attribute) -> Option<&'a str> {
        self.values[attribute.index()]
    }
}

/// Coded values, PIN code and PIN description for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPinRecord")]
pub struct PinRecord {
    codes: Vec<String>,
    /// Concatenated PIN code.
    pub pin_code: String,
    /// Raw values joined with `", "`.
    pub description: String,
}

impl PinRecord {
    /// Build a record from coded values given in [`CodedColumn::ALL`] order.
    ///
    /// # Panics
    ///
    /// Panics if `codes` does not hold exactly one value per coded column.
    pub fn new(codes: Vec<String>, pin_code: String, description: String) -> Self {
        assert_eq!(codes.len(), CodedColumn::COUNT, "one code per coded column");
        Self {
            codes,
            pin_code,
            description,
        }
    }

    /// Code fragment for one coded column (empty when unmapped).
    pub fn code(&self, column: CodedColumn) -> &str {
        &self.codes[column.index()]
    }

    /// Coded values paired with their columns, in output order.
    pub fn codes(&self) -> impl Iterator<Item = (CodedColumn, &str)> {
        CodedColumn::ALL
            .into_iter()
            .zip(self.codes.iter().map(String::as_str))
    }

    /// Whether a coded cell will be highlighted as blank.
    pub fn is_code_blank(&self, column: CodedColumn) -> bool {
        is_blank(Some(self.code(column)))
    }

    /// Number of codable PIN positions that produced no code.
    ///
    /// Reserved positions are always empty and are not counted.
    pub fn blank_pin_positions(&self) -> usize {
        CodedColumn::PIN_ORDER
            .into_iter()
            .filter(|column| !column.is_reserved() && self.is_code_blank(*column))
            .count()
    }
}

#[derive(Deserialize)]
struct RawPinRecord {
    codes: Vec<String>,
    pin_code: String,
    description: String,
}

impl TryFrom<RawPinRecord> for PinRecord {
    type Error = String;

    fn try_from(raw: RawPinRecord) -> Result<Self, Self::Error> {
        if raw.codes.len() != CodedColumn::COUNT {
            return Err(format!(
                "expected {} codes, found {}",
                CodedColumn::COUNT,
                raw.codes.len()
            ));
        }
        Ok(Self {
            codes: raw.codes,
            pin_code: raw.pin_code,
            description: raw.description,
        })
    }
}
