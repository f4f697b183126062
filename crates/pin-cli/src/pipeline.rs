//! Generate pipeline: read, code, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use pin_ingest::{ReadOptions, read_table};
use pin_output::{OutputFormat, WriteReport, default_output_path, write_table};
use pin_transform::{CodingStats, ProgressObserver, process_table};

/// Inputs of one `generate` run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub sheet: Option<String>,
    /// Explicit format; inferred from `output` otherwise.
    pub format: Option<OutputFormat>,
    /// Code the input without writing anything.
    pub dry_run: bool,
}

/// Outcome of a `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub output_path: PathBuf,
    /// `None` on a dry run.
    pub output: Option<WriteReport>,
    pub stats: CodingStats,
    pub replaced_columns: Vec<String>,
    pub rows: usize,
}

/// Output path and format for a run.
///
/// An explicit format wins; otherwise the output extension decides, and
/// XLSX is used when no output path is given. Writing over the input file
/// is refused.
pub fn resolve_output(options: &GenerateOptions) -> Result<(PathBuf, OutputFormat)> {
    let (path, format) = match (&options.output, options.format) {
        (Some(path), Some(format)) => (path.clone(), format),
        (Some(path), None) => (path.clone(), OutputFormat::from_path(path)?),
        (None, format) => {
            let format = format.unwrap_or_default();
            (default_output_path(&options.input, format), format)
        }
    };
    if same_file(&path, &options.input) {
        bail!(
            "output path {} is the input file; choose another --output",
            path.display()
        );
    }
    Ok((path, format))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Run the whole generate pipeline.
pub fn run_generate(
    options: &GenerateOptions,
    observer: &mut dyn ProgressObserver,
) -> Result<GenerateResult> {
    let span = info_span!("generate", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let (output_path, format) = resolve_output(options)?;

    let read_options = ReadOptions {
        sheet: options.sheet.clone(),
    };
    let table = read_table(&options.input, &read_options)
        .with_context(|| format!("read {}", options.input.display()))?;

    let processed = process_table(&table.frame, observer)
        .with_context(|| format!("code {}", options.input.display()))?;

    let output = if options.dry_run {
        info!(output = %output_path.display(), "dry run, output not written");
        None
    } else {
        let report = write_table(&processed.frame, &output_path, format)
            .with_context(|| format!("write {}", output_path.display()))?;
        Some(report)
    };

    info!(
        rows = processed.stats.rows(),
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );
    Ok(GenerateResult {
        input: options.input.clone(),
        sheet: table.sheet,
        output_path,
        output,
        rows: processed.stats.rows(),
        stats: processed.stats,
        replaced_columns: processed.replaced_columns,
    })
}
