//! CLI argument definitions for the well-being dataset reshaper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "owb",
    version,
    about = "OECD well-being dataset reshaper - clean SDMX CSV exports for charting",
    long_about = "Clean and reshape OECD well-being survey exports.\n\n\
                  Converts long/SDMX-style CSV files into cleaner long or wide\n\
                  forms suitable for D3-based visualization."
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
    /// Pivot a long-format export into one row per country and year.
    Wide(WideArgs),

    /// Clean a long-format export, keeping all substantive columns.
    Clean(CleanArgs),

    /// Forward-fill blank leading columns left by merged spreadsheet cells.
    Fill(FillArgs),

    /// List the distinct values of a column.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct WideArgs {
    /// Path to the long-format CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_wide_<from>_<to>.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// First year of the coverage window (inclusive).
    #[arg(long = "from-year", value_name = "YEAR", default_value_t = 2010)]
    pub from_year: i32,

    /// Last year of the coverage window (inclusive).
    #[arg(long = "to-year", value_name = "YEAR", default_value_t = 2024)]
    pub to_year: i32,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the long-format CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_clean.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FillArgs {
    /// Path to the spreadsheet CSV export (read as Windows-1252).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file, written as UTF-8 (default: <INPUT stem>_filled.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV file to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Normalized column name to enumerate.
    #[arg(long = "column", value_name = "NAME", default_value = "measure")]
    pub column: String,

    /// Maximum number of distinct values to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 200)]
    pub limit: usize,
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
