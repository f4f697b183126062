//! Integration tests for loading workbooks and CSV files.

use std::fs;
use std::path::Path;

use pin_ingest::{IngestError, InputFormat, ReadOptions, read_table, sheet_names};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

fn write_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "Revision").unwrap();

    let valves = workbook.add_worksheet();
    valves.set_name("Valves").unwrap();
    valves.write_string(0, 0, "Model Number").unwrap();
    valves.write_string(0, 1, "Actuator Size").unwrap();
    valves.write_string(0, 2, "Model Number").unwrap();
    valves.write_string(1, 0, "CV-18").unwrap();
    valves.write_number(1, 1, 12.0).unwrap();
    valves.write_string(1, 2, "duplicate").unwrap();
    // Row 2 left empty.
    valves.write_string(3, 0, "CV-41").unwrap();
    valves.write_number(3, 1, 0.5).unwrap();

    workbook.save(path).unwrap();
}

fn column_values(df: &polars::prelude::DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(String::from))
        .collect()
}

#[test]
fn reads_selected_sheet_as_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("valves.xlsx");
    write_workbook(&path);

    let options = ReadOptions::default().with_sheet("Valves");
    let table = read_table(&path, &options).unwrap();

    assert_eq!(table.format, InputFormat::Workbook);
    assert_eq!(table.sheet.as_deref(), Some("Valves"));
    assert_eq!(table.frame.height(), 2);
    assert_eq!(
        column_values(&table.frame, "Actuator Size"),
        vec![Some("12".to_string()), Some("0.5".to_string())]
    );
    assert_eq!(
        column_values(&table.frame, "Model Number.1"),
        vec![Some("duplicate".to_string()), None]
    );
}

#[test]
fn defaults_to_first_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("valves.xlsx");
    write_workbook(&path);

    assert_eq!(sheet_names(&path).unwrap(), vec!["Notes", "Valves"]);
    let table = read_table(&path, &ReadOptions::default()).unwrap();
    assert_eq!(table.sheet.as_deref(), Some("Notes"));
    assert_eq!(table.frame.height(), 0);
}

#[test]
fn unknown_sheet_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("valves.xlsx");
    write_workbook(&path);

    let err = read_table(&path, &ReadOptions::default().with_sheet("Data")).unwrap_err();
    let IngestError::SheetNotFound { available, .. } = err else {
        panic!("expected SheetNotFound");
    };
    assert_eq!(available, vec!["Notes", "Valves"]);
}

#[test]
fn reads_csv_and_ignores_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("valves.csv");
    fs::write(&path, "Model Number,Rating Class\nCV-18,Class 300\n").unwrap();

    let table = read_table(&path, &ReadOptions::default().with_sheet("Valves")).unwrap();
    assert_eq!(table.format, InputFormat::Csv);
    assert_eq!(table.sheet, None);
    assert_eq!(
        column_values(&table.frame, "Rating Class"),
        vec![Some("Class 300".to_string())]
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let err = read_table(&dir.path().join("absent.csv"), &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
