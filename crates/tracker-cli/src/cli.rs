//! CLI argument definitions for the sample tracker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tracker_cli::request::Selection;

#[derive(Parser)]
#[command(
    name = "sample-tracker",
    version,
    about = "Sample tracker - filter sample tables by facets and report completion",
    long_about = "Filter a sample tracking table by facet selections.\n\n\
                  Reports completion of 0/1 progress columns over the matching rows\n\
                  and exports them as CSV."
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

    /// Allow selected cell values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in dashboard presets.
    Presets,

    /// Print each configured facet with the values it offers.
    Options(SourceArgs),

    /// Print row counts, completion and coverage for the current view.
    Summary(SummaryArgs),

    /// Print the rows of the current view.
    Show(ShowArgs),

    /// Export the current view as a CSV data URI or file.
    Export(ExportArgs),
}

/// Where the table and its profile come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Dashboard profile (TOML). Takes precedence over --preset.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Built-in profile to use when no --config is given.
    #[arg(long = "preset", value_name = "NAME", default_value = "kids-first")]
    pub preset: String,

    /// Source table, replacing the profile's `source`.
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,
}

/// Source plus the facet selections that define the view.
#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Select VALUE on COLUMN. Repeat to select several values; values on
    /// the same column are alternatives, different columns must all match.
    #[arg(long = "select", value_name = "COLUMN=VALUE")]
    pub select: Vec<Selection>,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Print at most N rows.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Write raw CSV here instead of printing the data URI. A directory
    /// receives the profile's export filename.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
