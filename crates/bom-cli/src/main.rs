//! `bom-unify`: merge BOM and distributor exports.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use bom_cli::logging::{LogConfig, init_logging};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_fields, run_headers, run_merge};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Merge(args) => {
            let report = run_merge(args)?;
            print_summary(&report);
            Ok(())
        }
        Command::Headers(args) => run_headers(args),
        Command::Fields(args) => run_fields(args),
    }
}

/// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let level = explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter());
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    LogConfig::new(level)
        .with_env_filter(explicit.is_none() && !cli.verbosity.is_present())
        .with_format(cli.log_format.into())
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}
