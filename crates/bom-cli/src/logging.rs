//! Subscriber setup for the `bom-unify` binary.
//!
//! Library crates only emit `tracing` events; this module decides where they
//! go. Levels used across the workspace:
//!
//! - `warn`: skipped inputs (empty files, folders without source files)
//! - `info`: stage progress and record counts
//! - `debug`: per-file detail and header collisions
//! - `trace`: per-record detail; part numbers appear only with `--log-data`

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Targets that follow the configured level. Everything else logs at `warn`.
const WORKSPACE_TARGETS: &[&str] = &[
    "bom_cli",
    "bom_ingest",
    "bom_map",
    "bom_merge",
    "bom_model",
    "bom_output",
];

static LOG_DATA: AtomicBool = AtomicBool::new(false);

/// Stand-in for cell values when `--log-data` is off.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn log_data_enabled() -> bool {
    LOG_DATA.load(Ordering::Relaxed)
}

/// Passes `value` through only when cell values may be logged.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    /// One JSON object per event, span closes included.
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let a set `RUST_LOG` replace the directives built from `level_filter`.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_timestamps: bool,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LevelFilter::WARN)
    }
}

impl LogConfig {
    pub fn new(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: true,
            with_timestamps: false,
            log_file: None,
            log_data: false,
        }
    }

    #[must_use]
    pub fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }

    /// Filter directives: `warn` globally, `level_filter` for workspace crates.
    pub fn directives(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        let mut directives = String::from("warn");
        for target in WORKSPACE_TARGETS {
            directives.push_str(&format!(",{target}={level}"));
        }
        directives
    }

    fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter
            && let Ok(filter) = EnvFilter::try_from_default_env()
        {
            return filter;
        }
        EnvFilter::new(self.directives())
    }

    fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        match &self.log_file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            None => Ok(BoxMakeWriter::new(io::stderr)),
        }
    }

    fn fmt_layer<S>(&self, writer: BoxMakeWriter) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        // Escape codes never go to a file.
        let ansi = self.with_ansi && self.log_file.is_none();
        let layer = fmt::layer().with_writer(writer).with_target(false);
        match (self.format, self.with_timestamps) {
            (LogFormat::Json, _) => layer.json().with_span_events(FmtSpan::CLOSE).boxed(),
            (LogFormat::Compact, true) => layer.compact().with_ansi(ansi).boxed(),
            (LogFormat::Compact, false) => layer.compact().with_ansi(ansi).without_time().boxed(),
            (LogFormat::Pretty, true) => layer.with_ansi(ansi).boxed(),
            (LogFormat::Pretty, false) => layer.with_ansi(ansi).without_time().boxed(),
        }
    }
}

/// Installs the global subscriber. Call once, before any command runs.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    LOG_DATA.store(config.log_data, Ordering::Relaxed);
    let writer = config.make_writer()?;
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(config.fmt_layer(writer))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_scope_level_to_workspace_crates() {
        let directives = LogConfig::new(LevelFilter::DEBUG).directives();
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("bom_merge=debug"));
        assert!(directives.contains("bom_ingest=debug"));
        assert_eq!(directives.matches('=').count(), WORKSPACE_TARGETS.len());
    }

    #[test]
    fn off_level_silences_workspace_crates() {
        let directives = LogConfig::new(LevelFilter::OFF).directives();
        assert!(directives.contains("bom_cli=off"));
    }

    #[test]
    fn builders_set_fields() {
        let config = LogConfig::default()
            .with_format(LogFormat::Json)
            .with_env_filter(false)
            .with_log_data(true);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.use_env_filter);
        assert!(config.log_data);
    }

    #[test]
    fn values_are_redacted_by_default() {
        assert_eq!(redact_value("LM358N"), REDACTED_VALUE);
    }
}
