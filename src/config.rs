use clap::{Parser, ValueEnum};

use crate::library::DEFAULT_HISTORY_LIMIT;

/// Command-line arguments for the library catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimum level of diagnostics written to stderr (`RUST_LOG` takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// How book, user and history listings are rendered
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored menu headings
    #[arg(long)]
    pub no_color: bool,

    /// Number of checkout/check-in transactions kept in the history
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,
}

/// Log verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Rejected operations and errors
    Warn,
    /// Applied checkouts and check-ins
    Info,
    /// Every catalog change
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Rendering of listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per entry
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Diagnostics verbosity
    pub log_level: LogLevel,
    /// Listing format
    pub format: OutputFormat,
    /// Whether menu headings are colored
    pub color: bool,
    /// History bound handed to the library
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Text,
            color: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Cli {
    /// Resolve parsed flags into runtime settings
    #[must_use]
    pub fn into_config(self) -> Config {
        Config {
            log_level: self.log_level,
            format: self.format,
            color: !self.no_color,
            history_limit: self.history_limit,
        }
    }
}
