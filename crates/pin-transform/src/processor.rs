//! Table processor: applies the row assembler to every row of a frame.

use std::ops::ControlFlow;
use std::time::Instant;

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series, StringChunked};
use tracing::{debug, info, info_span, warn};

use pin_model::{
    Attribute, AttributeValues, CodedColumn, PIN_CODE_COLUMN, PIN_DESCRIPTION_COLUMN,
};

use crate::assembler::assemble_row;
use crate::error::{Result, TransformError};
use crate::observer::{ProgressEvent, ProgressObserver, Stage};
use crate::schema::{resolve_columns, stale_derived_columns};
use crate::stats::CodingStats;

/// Output of [`process_table`].
#[derive(Debug, Clone)]
pub struct ProcessedTable {
    /// Input columns followed by the coded columns, `PIN-Code` and
    /// `PIN-Code description`.
    pub frame: DataFrame,
    pub stats: CodingStats,
    /// Derived columns found in the input and replaced.
    pub replaced_columns: Vec<String>,
}

/// Code every row of `df`.
///
/// Required columns are checked before any row is touched. Rows keep their
/// input order. Cancellation requested by `observer` is honoured between
/// rows and discards the partial result.
pub fn process_table(
    df: &DataFrame,
    observer: &mut dyn ProgressObserver,
) -> Result<ProcessedTable> {
    let total = df.height();
    let span = info_span!("process_table", rows = total, columns = df.width());
    let _guard = span.enter();
    let start = Instant::now();

    notify(observer, ProgressEvent::Stage(Stage::ResolveColumns), 0)?;
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let resolution = resolve_columns(&headers)?;
    for attribute in resolution.absent_optional() {
        debug!(attribute = %attribute, "optional column absent");
    }

    let string_columns: Vec<(Attribute, Column)> = resolution
        .bound()
        .map(|(attribute, name)| {
            let column = df.column(name)?.cast(&DataType::String)?;
            Ok((attribute, column))
        })
        .collect::<Result<_>>()?;
    let cells: Vec<(Attribute, Vec<Option<&str>>)> = string_columns
        .iter()
        .map(|(attribute, column)| {
            let values: &StringChunked = column.str()?;
            Ok((*attribute, values.into_iter().collect()))
        })
        .collect::<Result<_>>()?;

    notify(observer, ProgressEvent::Stage(Stage::CodeRows), 0)?;
    let mut coded: Vec<Vec<String>> = vec![Vec::with_capacity(total); CodedColumn::COUNT];
    let mut pin_codes = Vec::with_capacity(total);
    let mut descriptions = Vec::with_capacity(total);
    let mut stats = CodingStats::default();
    for row_idx in 0..total {
        let mut row = AttributeValues::new();
        for (attribute, values) in &cells {
            row.set(*attribute, values[row_idx]);
        }
        let record = assemble_row(&row);
        stats.record(&record);
        for (column, code) in record.codes() {
            coded[column.index()].push(code.to_string());
        }
        pin_codes.push(record.pin_code);
        descriptions.push(record.description);
        notify(
            observer,
            ProgressEvent::Row {
                completed: row_idx + 1,
                total,
            },
            row_idx + 1,
        )?;
    }

    notify(observer, ProgressEvent::Stage(Stage::AppendColumns), total)?;
    let replaced_columns = stale_derived_columns(&headers);
    let mut frame = df.clone();
    for name in &replaced_columns {
        warn!(column = %name, "replacing previously derived column");
        frame = frame.drop(name)?;
    }
    let mut derived: Vec<Column> = CodedColumn::ALL
        .into_iter()
        .zip(coded)
        .map(|(column, values)| string_column(column.header(), values))
        .collect();
    derived.push(string_column(PIN_CODE_COLUMN, pin_codes));
    derived.push(string_column(PIN_DESCRIPTION_COLUMN, descriptions));
    let frame = frame.hstack(&derived)?;

    info!(
        rows = total,
        blank_cells = stats.total_blank(),
        incomplete_rows = stats.incomplete_rows(),
        duration_ms = start.elapsed().as_millis(),
        "coding complete"
    );
    notify(observer, ProgressEvent::Finished { rows: total }, total)?;

    Ok(ProcessedTable {
        frame,
        stats,
        replaced_columns,
    })
}

fn string_column(name: &str, values: Vec<String>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn notify(
    observer: &mut dyn ProgressObserver,
    event: ProgressEvent,
    rows_processed: usize,
) -> Result<()> {
    match observer.on_event(&event) {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(()) => {
            info!(rows_processed, "processing cancelled");
            Err(TransformError::Cancelled { rows_processed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoProgress;

    fn row_df(values: &[(&str, &str)]) -> DataFrame {
        let columns: Vec<Column> = values
            .iter()
            .map(|&(name, value)| Series::new(name.into(), vec![value]).into_column())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    fn required_row() -> Vec<(&'static str, &'static str)> {
        Attribute::required()
            .map(|attribute| (attribute.header(), ""))
            .collect()
    }

    #[test]
    fn appends_derived_columns_after_input() {
        let mut values = required_row();
        values.push(("Notes", "keep me"));
        let df = row_df(&values);
        let processed = process_table(&df, &mut NoProgress).unwrap();

        let names: Vec<String> = processed
            .frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names.len(), values.len() + CodedColumn::COUNT + 2);
        assert_eq!(names[values.len() - 1], "Notes");
        assert_eq!(names[values.len()], "Model Number-Code");
        assert_eq!(names.last().map(String::as_str), Some(PIN_DESCRIPTION_COLUMN));
    }

    #[test]
    fn casts_numeric_columns_to_text() {
        let mut columns: Vec<Column> = Attribute::required()
            .filter(|attribute| *attribute != Attribute::ActuatorSize)
            .map(|attribute| Series::new(attribute.header().into(), vec![""]).into_column())
            .collect();
        columns.push(Series::new("Actuator Size".into(), vec![16_i64]).into_column());
        let df = DataFrame::new(columns).unwrap();

        let processed = process_table(&df, &mut NoProgress).unwrap();
        let codes = processed.frame.column("Actuator Size-Code").unwrap();
        assert_eq!(codes.str().unwrap().get(0), Some("C"));
    }

    #[test]
    fn cancellation_stops_at_row_boundary() {
        let df = row_df(&required_row());
        let mut observer = |event: &ProgressEvent| match event {
            ProgressEvent::Row { .. } => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        };
        let err = process_table(&df, &mut observer).unwrap_err();
        assert!(matches!(err, TransformError::Cancelled { rows_processed: 1 }));
    }

    #[test]
    fn missing_columns_fail_before_rows() {
        let df = row_df(&[("Model Number", "CV-18")]);
        let mut rows_seen = 0;
        let mut observer = |event: &ProgressEvent| {
            if matches!(event, ProgressEvent::Row { .. }) {
                rows_seen += 1;
            }
            ControlFlow::Continue(())
        };
        let err = process_table(&df, &mut observer).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumns { .. }));
        assert_eq!(rows_seen, 0);
    }
}
