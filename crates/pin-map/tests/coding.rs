//! Coding rule tests against the fixed tables.

use pin_map::{
    FieldRule, body_studs_code, code_field, contains_map, extract_after_dash, lookup_tables,
    plug_material_code, rule_for, table_for, tables,
};
use pin_model::{Attribute, AttributeValues, CodedColumn};
use proptest::prelude::*;

#[test]
fn overlapping_table_keys_resolve_to_the_specific_code() {
    let cases = [
        (Attribute::BodyMaterial, "CF8M", "G"),
        (Attribute::BodyMaterial, "CF8", "E"),
        (Attribute::BodyMaterial, "CF3M", "H"),
        (Attribute::BodyMaterial, "Super Duplex", "J"),
        (Attribute::BodyMaterial, "Duplex 2205", "I"),
        (Attribute::ActuatorSize, "23L", "F"),
        (Attribute::ActuatorSize, "23", "E"),
        (Attribute::ActuatorSize, "16", "C"),
        (Attribute::RatingClass, "Class 1500", "6"),
        (Attribute::RatingClass, "Class 150", "1"),
        (Attribute::Size, "4 x 3 x 2", "04"),
        (Attribute::Size, "14 x 12 x 10", "14"),
        (Attribute::Size, "1.5 x 1 x 1", "15"),
    ];
    for (attribute, value, expected) in cases {
        let table = table_for(attribute).expect("attribute is coded by lookup");
        assert_eq!(
            table.lookup(Some(value)),
            expected,
            "{attribute} value {value:?}"
        );
    }
}

#[test]
fn equal_percentage_aliases_share_a_code() {
    let table = &*tables::TRIM_CHARACTERISTIC;
    assert_eq!(table.lookup(Some("Equal Percentage")), "2");
    assert_eq!(table.lookup(Some("EQ%")), "2");
}

#[test]
fn unmatched_bonnet_codes_to_na() {
    let row = AttributeValues::new().with(Attribute::BonnetType, "Bellows Seal");
    assert_eq!(code_field(CodedColumn::BonnetType, &row), "NA");
    assert_eq!(code_field(CodedColumn::BonnetType, &AttributeValues::new()), "NA");
}

#[test]
fn plug_material_hardened_wins_over_plain() {
    assert_eq!(plug_material_code(Some("CF8M-316HF")), "1");
    assert_eq!(plug_material_code(Some("CF8M-316")), "2");
}

#[test]
fn body_studs_cases() {
    assert_eq!(body_studs_code(Some("Bolted, Zinc Coated")), "2");
    assert_eq!(body_studs_code(Some("Carbon Steel")), "1");
    assert_eq!(body_studs_code(None), "1");
}

#[test]
fn extract_after_dash_cases() {
    assert_eq!(extract_after_dash(Some("VLV-ABCD"), 2), "C");
    assert_eq!(extract_after_dash(Some("VLV-AB"), 2), "");
    assert_eq!(extract_after_dash(Some("VLV"), 2), "");
    assert_eq!(extract_after_dash(None, 2), "");
}

#[test]
fn every_lookup_table_is_wired_to_its_column() {
    for table in lookup_tables() {
        let column = CodedColumn::ALL
            .into_iter()
            .find(|column| {
                column.source() == table.attribute()
                    && matches!(rule_for(*column), FieldRule::Lookup(_))
            })
            .expect("lookup table has a coded column");
        assert_eq!(rule_for(column), FieldRule::Lookup(table));
    }
}

proptest! {
    #[test]
    fn missing_value_always_yields_default(default in "[A-Z]{0,3}") {
        for table in lookup_tables() {
            prop_assert_eq!(contains_map(None, table.rules(), &default), default.as_str());
        }
    }

    #[test]
    fn coders_are_total(value in proptest::option::of(".{0,40}")) {
        let row_value = value.as_deref();
        let studs = body_studs_code(row_value);
        prop_assert!(studs == "1" || studs == "2");
        prop_assert!(["", "1", "2", "3", "4"].contains(&plug_material_code(row_value)));
        for position in 0..6 {
            prop_assert!(extract_after_dash(row_value, position).chars().count() <= 1);
        }
    }

    #[test]
    fn lookup_result_is_a_table_code_or_default(value in ".{0,40}") {
        for table in lookup_tables() {
            let code = table.lookup(Some(value.as_str()));
            prop_assert!(
                code == table.default_code()
                    || table.rules().iter().any(|rule| rule.code == code)
            );
        }
    }
}
