//! CLI argument definitions for BOM Unify.

use std::path::PathBuf;

use bom_cli::logging::LogFormat;
use bom_model::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "bom-unify",
    version,
    about = "Merge BOM and distributor exports into one deduplicated parts list",
    long_about = "Merge BOM and distributor exports into one deduplicated parts list.\n\n\
                  Column headers are mapped onto a canonical schema, rows sharing an MPN\n\
                  are merged, and a condensed view of key columns is exported alongside."
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

    /// Allow cell values (part numbers, prices) in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and merge source files, then export the results.
    Merge(MergeArgs),

    /// Show how each source file's headers map onto the canonical schema.
    Headers(HeadersArgs),

    /// List the canonical fields and their recognized aliases.
    Fields(SchemaArgs),
}

#[derive(Args)]
pub struct SchemaArgs {
    /// JSON alias table replacing the built-in one.
    ///
    /// Falls back to the BOM_UNIFY_ALIASES environment variable.
    #[arg(long = "aliases", value_name = "PATH", env = "BOM_UNIFY_ALIASES")]
    pub aliases: Option<PathBuf>,
}

#[derive(Args)]
pub struct HeadersArgs {
    /// Source files (.csv, .json) or folders containing them.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub schema: SchemaArgs,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Source files (.csv, .json) or folders containing them, in merge order.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for exported files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Output format for the merged and condensed views.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Skip the condensed view.
    #[arg(long = "no-condensed")]
    pub no_condensed: bool,

    /// Skip the full merged dataset.
    #[arg(long = "no-merged")]
    pub no_merged: bool,

    /// Merge and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub schema: SchemaArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Csv => Self::Csv,
            OutputFormatArg::Json => Self::Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
