//! Fixed lookup tables, one per coded attribute.
//!
//! Rules are listed in the order of the published PIN code sheet. Overlapping
//! patterns (`CF8`/`CF8M`, `23`/`23L`, `150`/`1500`, `4 x`/`14 x`) are
//! resolved by the leftmost-longest rule in [`crate::lookup`], so entries
//! carry no padding or ordering tricks.

use std::sync::LazyLock;

use pin_model::Attribute;

use crate::lookup::LookupTable;

/// Model series, keyed by the dash-prefixed number.
pub static MODEL_NUMBER: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::ModelNumber)
        .rule("-5", "05")
        .rule("-10", "10")
        .rule("-18", "18")
        .rule("-21", "21")
        .rule("-33", "33")
        .rule("-35", "35")
        .rule("-41", "41")
        .rule("-77", "77")
        .rule("-78", "78")
        .rule("-80", "80")
});

/// Nominal size, keyed by the inlet magnitude followed by `" x"`.
pub static SIZE: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::Size)
        .rule("0.5 x", "05")
        .rule("0.7 x", "75")
        .rule("1 x", "01")
        .rule("1.5 x", "15")
        .rule("2 x", "02")
        .rule("3 x", "03")
        .rule("4 x", "04")
        .rule("6 x", "06")
        .rule("8 x", "08")
        .rule("10 x", "10")
        .rule("12 x", "12")
        .rule("14 x", "14")
        .rule("16 x", "16")
        .rule("18 x", "18")
        .rule("20 x", "20")
        .rule("24 x", "24")
        .rule("26 x", "26")
        .rule("28 x", "28")
        .rule("30 x", "30")
        .rule("36 x", "36")
        .rule("40 x", "40")
        .rule("42 x", "42")
        .rule("48 x", "48")
});

/// Pressure class.
pub static RATING_CLASS: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::RatingClass)
        .rule("150", "1")
        .rule("300", "2")
        .rule("600", "3")
        .rule("800", "4")
        .rule("900", "5")
        .rule("1500", "6")
        .rule("2500", "7")
});

pub static END_CONNECTION: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::EndConnection)
        .rule("RF", "RF")
        .rule("FF", "FF")
        .rule("RTJ", "RJ")
        .rule("Lugged", "LG")
        .rule("BW", "BW")
        .rule("SW", "SW")
});

/// Body casting/forging grade.
pub static BODY_MATERIAL: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::BodyMaterial)
        .rule("WCC", "A")
        .rule("LCC", "B")
        .rule("A105", "C")
        .rule("LF2", "D")
        .rule("CF8", "E")
        .rule("CF3", "F")
        .rule("CF8M", "G")
        .rule("CF3M", "H")
        .rule("Duplex", "I")
        .rule("Super Duplex", "J")
        .rule("Aluminum Bronze", "K")
});

/// Bonnet style; unmatched bonnets code to `NA` rather than blank.
pub static BONNET_TYPE: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::BonnetType)
        .with_default("NA")
        .rule("Standard", "ST")
        .rule("Extended", "EB")
        .rule("Finned", "FB")
});

pub static ACTUATOR_MODEL: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::ActuatorModel)
        .rule("Top Mounted Handwheel", "20")
        .rule("87", "87")
        .rule("88", "88")
        .rule("51", "51")
        .rule("52", "52")
        .rule("53", "53")
        .rule("37", "37")
        .rule("38", "38")
        .rule("Electrical Linear", "EL")
        .rule("Electrical Rotary", "ER")
});

pub static ACTUATOR_SIZE: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::ActuatorSize)
        .rule("6", "A")
        .rule("12", "B")
        .rule("16", "C")
        .rule("20", "D")
        .rule("23L", "F")
        .rule("23", "E")
        .rule("11", "G")
        .rule("13", "H")
        .rule("15", "I")
        .rule("18", "J")
        .rule("24", "K")
        .rule("Electric", "L")
        .rule("10", "M")
});

/// Flow characteristic; `EQ` is shorthand for equal percentage.
pub static TRIM_CHARACTERISTIC: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(Attribute::TrimCharacteristic)
        .rule("Linear", "1")
        .rule("Equal Percentage", "2")
        .rule("EQ", "2")
        .rule("Modified Percentage", "3")
        .rule("Quick Opening", "4")
});

/// Every lookup table, in PIN order.
pub fn lookup_tables() -> [&'static LookupTable; 9] {
    [
        &*MODEL_NUMBER,
        &*SIZE,
        &*RATING_CLASS,
        &*END_CONNECTION,
        &*BODY_MATERIAL,
        &*BONNET_TYPE,
        &*ACTUATOR_MODEL,
        &*ACTUATOR_SIZE,
        &*TRIM_CHARACTERISTIC,
    ]
}

/// The lookup table coding `attribute`, if it is coded by lookup.
pub fn table_for(attribute: Attribute) -> Option<&'static LookupTable> {
    lookup_tables()
        .into_iter()
        .find(|table| table.attribute() == attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_table_has_unique_attribute() {
        let tables = lookup_tables();
        for (idx, table) in tables.iter().enumerate() {
            assert!(
                tables[idx + 1..]
                    .iter()
                    .all(|other| other.attribute() != table.attribute()),
                "duplicate table for {}",
                table.attribute()
            );
        }
    }

    #[test]
    fn only_bonnet_has_non_empty_default() {
        for table in lookup_tables() {
            let expected = if table.attribute() == Attribute::BonnetType {
                "NA"
            } else {
                ""
            };
            assert_eq!(table.default_code(), expected, "{}", table.attribute());
        }
    }

    #[test]
    fn bespoke_attributes_have_no_table() {
        assert!(table_for(Attribute::BodyStuds).is_none());
        assert!(table_for(Attribute::PlugMaterial).is_none());
        assert!(table_for(Attribute::SeatType).is_none());
        assert!(table_for(Attribute::RatingClass).is_some());
    }
}
