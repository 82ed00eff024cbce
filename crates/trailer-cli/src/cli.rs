//! CLI argument definitions for the trailer dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trailer-dashboard",
    version,
    about = "Trailer attachment and VRID dashboard",
    long_about = "Summarize OTR load records by scheduled date, origin region, and site.\n\n\
                  Reports trailer attachment risk and AZNG/AZNU equipment counts,\n\
                  with optional CSV and JSON export."
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

    /// Settings file (default: settings.toml in the platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print attachment and equipment summaries for a date range.
    Report(ReportArgs),

    /// List regions available for filtering, with load counts.
    Regions(SourceArgs),

    /// Show the earliest and latest scheduled arrival dates.
    Dates(SourceArgs),
}

/// Source table locations; fall back to `[sources]` in the settings file.
#[derive(Args)]
pub struct SourceArgs {
    /// Load records CSV.
    #[arg(long = "loads", value_name = "CSV")]
    pub loads: Option<PathBuf>,

    /// Region mapping CSV (origin, origin_region).
    #[arg(long = "regions", value_name = "CSV")]
    pub regions: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// First scheduled date to include (default: earliest in the data).
    #[arg(long = "start", value_name = "YYYY-MM-DD")]
    pub start: Option<NaiveDate>,

    /// Last scheduled date to include (default: latest in the data).
    #[arg(long = "end", value_name = "YYYY-MM-DD")]
    pub end: Option<NaiveDate>,

    /// Restrict to a region; repeat for several. Unmapped sites are then excluded.
    #[arg(long = "region", value_name = "NAME")]
    pub region: Vec<String>,

    /// Also write CSV and JSON report files to this directory.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
