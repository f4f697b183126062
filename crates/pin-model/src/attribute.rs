//! Attribute (source) columns and coded (derived) columns.
//!
//! The PIN layout is fixed: thirteen positions, each filled by the code of one
//! attribute. The order of [`Attribute::ALL`] and [`CodedColumn::PIN_ORDER`] is
//! the published order and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Header of the derived PIN code column.
pub const PIN_CODE_COLUMN: &str = "PIN-Code";

/// Header of the derived PIN description column.
pub const PIN_DESCRIPTION_COLUMN: &str = "PIN-Code description";

/// Separator placed between raw values in the PIN description.
pub const DESCRIPTION_SEPARATOR: &str = ", ";

/// Suffix appended to an attribute header to name its coded column.
pub const CODE_SUFFIX: &str = "-Code";

/// A named input column describing one property of a valve assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    ModelNumber,
    Size,
    RatingClass,
    EndConnection,
    BodyMaterial,
    BodyStuds,
    BonnetType,
    ActuatorModel,
    ActuatorSize,
    PlugMaterial,
    TrimType,
    SeatType,
    TrimCharacteristic,
}

impl Attribute {
    /// Number of attribute columns.
    pub const COUNT: usize = 13;

    /// All attributes in PIN description order.
    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::ModelNumber,
        Attribute::Size,
        Attribute::RatingClass,
        Attribute::EndConnection,
        Attribute::BodyMaterial,
        Attribute::BodyStuds,
        Attribute::BonnetType,
        Attribute::ActuatorModel,
        Attribute::ActuatorSize,
        Attribute::PlugMaterial,
        Attribute::TrimType,
        Attribute::SeatType,
        Attribute::TrimCharacteristic,
    ];

    /// Canonical header text as it appears in the input sheet.
    pub const fn header(self) -> &'static str {
        match self {
            Attribute::ModelNumber => "Model Number",
            Attribute::Size => "In x Body x Out Size",
            Attribute::RatingClass => "Rating Class",
            Attribute::EndConnection => "End Connection",
            Attribute::BodyMaterial => "Body Material",
            Attribute::BodyStuds => "Body Studs",
            Attribute::BonnetType => "Bonnet Type",
            Attribute::ActuatorModel => "Actuator Model",
            Attribute::ActuatorSize => "Actuator Size",
            Attribute::PlugMaterial => "Plug Material",
            Attribute::TrimType => "Trim Type",
            Attribute::SeatType => "Seat Type",
            Attribute::TrimCharacteristic => "Trim Characteristic",
        }
    }

    /// Whether the input must carry this column for a run to start.
    ///
    /// `Seat Type` only feeds the description, so a sheet without it is
    /// accepted and contributes an empty description field.
    pub const fn is_required(self) -> bool {
        !matches!(self, Attribute::SeatType)
    }

    /// Position in [`Attribute::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a header to an attribute after trimming surrounding whitespace.
    ///
    /// Matching is otherwise exact.
    pub fn from_header(header: &str) -> Option<Attribute> {
        let trimmed = header.trim();
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.header() == trimmed)
    }

    /// All attributes the input must carry.
    pub fn required() -> impl Iterator<Item = Attribute> {
        Self::ALL.into_iter().filter(|attribute| attribute.is_required())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A derived column holding the code fragment for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CodedColumn {
    ModelNumber,
    Size,
    RatingClass,
    EndConnection,
    BodyMaterial,
    BodyStuds,
    BonnetType,
    ActuatorModel,
    ActuatorSize,
    PlugMaterial,
    PlugType,
    TrimType,
    SeatType,
    TrimCharacteristic,
}

impl CodedColumn {
    /// Number of coded columns, including `Plug Type-Code`.
    pub const COUNT: usize = 14;

    /// Coded columns in output order.
    pub const ALL: [CodedColumn; Self::COUNT] = [
        CodedColumn::ModelNumber,
        CodedColumn::Size,
        CodedColumn::RatingClass,
        CodedColumn::EndConnection,
        CodedColumn::BodyMaterial,
        CodedColumn::BodyStuds,
        CodedColumn::BonnetType,
        CodedColumn::ActuatorModel,
        CodedColumn::ActuatorSize,
        CodedColumn::PlugMaterial,
        CodedColumn::PlugType,
        CodedColumn::TrimType,
        CodedColumn::SeatType,
        CodedColumn::TrimCharacteristic,
    ];

    /// The thirteen PIN positions, in published order.
    ///
    /// `Plug Type-Code` is derived and emitted but is not a PIN position.
    pub const PIN_ORDER: [CodedColumn; 13] = [
        CodedColumn::ModelNumber,
        CodedColumn::Size,
        CodedColumn::RatingClass,
        CodedColumn::EndConnection,
        CodedColumn::BodyMaterial,
        CodedColumn::BodyStuds,
        CodedColumn::BonnetType,
        CodedColumn::ActuatorModel,
        CodedColumn::ActuatorSize,
        CodedColumn::PlugMaterial,
        CodedColumn::TrimType,
        CodedColumn::SeatType,
        CodedColumn::TrimCharacteristic,
    ];

    /// Header of the derived column, e.g. `Rating Class-Code`.
    pub const fn header(self) -> &'static str {
        match self {
            CodedColumn::ModelNumber => "Model Number-Code",
            CodedColumn::Size => "In x Body x Out Size-Code",
            CodedColumn::RatingClass => "Rating Class-Code",
            CodedColumn::EndConnection => "End Connection-Code",
            CodedColumn::BodyMaterial => "Body Material-Code",
            CodedColumn::BodyStuds => "Body Studs-Code",
            CodedColumn::BonnetType => "Bonnet Type-Code",
            CodedColumn::ActuatorModel => "Actuator Model-Code",
            CodedColumn::ActuatorSize => "Actuator Size-Code",
            CodedColumn::PlugMaterial => "Plug Material-Code",
            CodedColumn::PlugType => "Plug Type-Code",
            CodedColumn::TrimType => "Trim Type-Code",
            CodedColumn::SeatType => "Seat Type-Code",
            CodedColumn::TrimCharacteristic => "Trim Characteristic-Code",
        }
    }

    /// The attribute whose raw value this column is computed from.
    ///
    /// Plug Type and Trim Type are read out of the model number suffix, not
    /// from their own input columns.
    pub const fn source(self) -> Attribute {
        match self {
            CodedColumn::ModelNumber | CodedColumn::PlugType | CodedColumn::TrimType => {
                Attribute::ModelNumber
            }
            CodedColumn::Size => Attribute::Size,
            CodedColumn::RatingClass => Attribute::RatingClass,
            CodedColumn::EndConnection => Attribute::EndConnection,
            CodedColumn::BodyMaterial => Attribute::BodyMaterial,
            CodedColumn::BodyStuds => Attribute::BodyStuds,
            CodedColumn::BonnetType => Attribute::BonnetType,
            CodedColumn::ActuatorModel => Attribute::ActuatorModel,
            CodedColumn::ActuatorSize => Attribute::ActuatorSize,
            CodedColumn::PlugMaterial => Attribute::PlugMaterial,
            CodedColumn::SeatType => Attribute::SeatType,
            CodedColumn::TrimCharacteristic => Attribute::TrimCharacteristic,
        }
    }

    /// Position in [`CodedColumn::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this column contributes a PIN position.
    pub const fn in_pin(self) -> bool {
        !matches!(self, CodedColumn::PlugType)
    }

    /// Whether the column is held for future use and always coded empty.
    pub const fn is_reserved(self) -> bool {
        matches!(self, CodedColumn::SeatType)
    }
}

impl fmt::Display for CodedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Headers of every column the processor appends, in output order.
pub fn derived_headers() -> impl Iterator<Item = &'static str> {
    CodedColumn::ALL
        .into_iter()
        .map(CodedColumn::header)
        .chain([PIN_CODE_COLUMN, PIN_DESCRIPTION_COLUMN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coded_headers_follow_attribute_headers() {
        for column in CodedColumn::ALL {
            if matches!(column, CodedColumn::PlugType | CodedColumn::TrimType) {
                continue;
            }
            let expected = format!("{}{CODE_SUFFIX}", column.source().header());
            assert_eq!(column.header(), expected);
        }
        assert_eq!(
            CodedColumn::TrimType.header(),
            format!("{}{CODE_SUFFIX}", Attribute::TrimType.header())
        );
    }

    #[test]
    fn pin_order_skips_plug_type() {
        assert_eq!(CodedColumn::PIN_ORDER.len(), 13);
        assert!(!CodedColumn::PIN_ORDER.contains(&CodedColumn::PlugType));
        assert!(CodedColumn::PIN_ORDER.iter().all(|column| column.in_pin()));
    }

    #[test]
    fn header_lookup_trims_whitespace() {
        assert_eq!(
            Attribute::from_header("  Rating Class "),
            Some(Attribute::RatingClass)
        );
        assert_eq!(Attribute::from_header("rating class"), None);
    }

    #[test]
    fn seat_type_is_optional() {
        let required: Vec<Attribute> = Attribute::required().collect();
        assert_eq!(required.len(), 12);
        assert!(!required.contains(&Attribute::SeatType));
    }

    #[test]
    fn index_matches_position() {
        for (idx, attribute) in Attribute::ALL.into_iter().enumerate() {
            assert_eq!(attribute.index(), idx);
        }
        for (idx, column) in CodedColumn::ALL.into_iter().enumerate() {
            assert_eq!(column.index(), idx);
        }
    }
}
