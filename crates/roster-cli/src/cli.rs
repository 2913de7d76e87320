//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Validate client, worker and task sheets before allocation",
    long_about = "Validate client, worker and task sheets before allocation.\n\n\
                  Reads clients.csv, workers.csv and tasks.csv from a data folder,\n\
                  reports errors, warnings and notes, and writes a cleaned export bundle."
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
    /// Validate the sheets in a data folder and print the report.
    Validate(ValidateArgs),

    /// Validate, then write the export bundle.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Folder containing the client, worker and task CSV sheets.
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,

    /// Project config with weights and business rules
    /// (default: <DATA_FOLDER>/roster.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Folder containing the client, worker and task CSV sheets.
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,

    /// Directory the export files are written to.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Project config with weights and business rules
    /// (default: <DATA_FOLDER>/roster.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the export even when validation errors are found.
    #[arg(long = "allow-errors")]
    pub allow_errors: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
