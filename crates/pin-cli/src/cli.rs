//! CLI argument definitions for the PIN code generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pin-generator",
    version,
    about = "Generate PIN codes from valve specification sheets",
    long_about = "Generate PIN codes from valve specification sheets.\n\n\
                  Reads a workbook or CSV with one valve per row, codes each attribute\n\
                  with fixed lookup rules and writes the sheet back with the coded\n\
                  columns, PIN code and PIN description appended. Uncoded cells are\n\
                  highlighted yellow in XLSX output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Code every row of an input sheet and write the augmented table.
    Generate(GenerateArgs),

    /// Print the coding rules, optionally for one attribute.
    Rules {
        /// Attribute header (e.g. "Rating Class") or slug (e.g. rating-class).
        #[arg(value_name = "ATTRIBUTE")]
        attribute: Option<String>,
    },

    /// Code a single value, for checking how a cell will be coded.
    Code {
        /// Attribute header (e.g. "Rating Class") or slug (e.g. rating-class).
        #[arg(value_name = "ATTRIBUTE")]
        attribute: String,

        /// Raw cell value.
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Input workbook (.xlsx, .xlsm, .xlsb, .xls, .ods) or .csv file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: PIN_Generated.<ext> next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Worksheet to read (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Output format (default: from the output extension, else xlsx).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Code the input and print the summary without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Disable the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xlsx,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
