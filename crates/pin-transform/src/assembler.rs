//! Row assembler: codes every column of one row and builds the PIN strings.

use pin_map::code_field;
use pin_model::{Attribute, AttributeValues, CodedColumn, DESCRIPTION_SEPARATOR, PinRecord};

/// Code one row.
///
/// The PIN code concatenates the PIN positions in published order with no
/// separator; unmapped positions contribute nothing. The description joins
/// the raw attribute values in the same order, missing values as `""`.
pub fn assemble_row(row: &AttributeValues<'_>) -> PinRecord {
    let codes: Vec<String> = CodedColumn::ALL
        .into_iter()
        .map(|column| code_field(column, row).into_owned())
        .collect();
    let pin_code: String = CodedColumn::PIN_ORDER
        .into_iter()
        .map(|column| codes[column.index()].as_str())
        .collect();
    let description = Attribute::ALL
        .into_iter()
        .map(|attribute| row.get(attribute).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(DESCRIPTION_SEPARATOR);
    PinRecord::new(codes, pin_code, description)
}
