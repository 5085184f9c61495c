//! CLI argument definitions for datasweep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sweep_model::{CleaningOp, ExportFormat};

#[derive(Parser)]
#[command(
    name = "datasweep",
    version,
    about = "DataSweep - Clean tabular files and export the results",
    long_about = "Clean CSV and XLSX files in batch.\n\n\
                  Strips spreadsheet index artifacts, narrows to selected columns,\n\
                  applies cleaning operations in the order given, and exports the\n\
                  result back to CSV or XLSX. A failing file is skipped; the rest\n\
                  of the batch keeps going."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Clean one or more tabular files and export the results.
    Clean(CleanArgs),

    /// List the available cleaning operations.
    Ops,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input files (.csv or .xlsx).
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Columns to keep, comma separated, in the given order.
    ///
    /// Omitting this keeps every column and emits a warning, matching the
    /// empty-selection behavior of the interactive flow.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Cleaning operation to apply; repeat the flag to chain operations.
    ///
    /// Operations run in exactly the order given. Applying fill-mean before
    /// drop-nulls keeps rows that the reverse order would discard.
    #[arg(long = "apply", value_name = "OP")]
    pub apply: Vec<CleaningOpArg>,

    /// Export format.
    #[arg(long = "to", value_enum, default_value = "csv")]
    pub to: ExportFormatArg,

    /// Output directory for exported files (default: next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print a numeric-column chart summary per file (first two numeric
    /// columns only).
    #[arg(long = "chart")]
    pub chart: bool,

    /// Print the first rows of each working dataset before export.
    #[arg(long = "preview")]
    pub preview: bool,

    /// Process and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the batch report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI cleaning operation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CleaningOpArg {
    /// Remove duplicate rows, keeping the first occurrence.
    RemoveDuplicates,
    /// Fill missing numeric values with the column mean.
    FillMean,
    /// Drop every row containing a missing value.
    DropNulls,
}

impl CleaningOpArg {
    pub fn to_op(self) -> CleaningOp {
        match self {
            CleaningOpArg::RemoveDuplicates => CleaningOp::RemoveDuplicates,
            CleaningOpArg::FillMean => CleaningOp::FillMissingNumericWithMean,
            CleaningOpArg::DropNulls => CleaningOp::DropRowsWithAnyNull,
        }
    }
}

/// CLI export format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Xlsx,
}

impl ExportFormatArg {
    pub fn to_format(self) -> ExportFormat {
        match self {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
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
