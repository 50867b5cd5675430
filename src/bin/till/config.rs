//! Till configuration

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Till checkout configuration
#[derive(Debug, Parser)]
#[command(name = "till", about = "Scan products and price the basket", long_about = None)]
pub(crate) struct TillConfig {
    /// SKUs to scan, in order. Defaults to the fixture's or the demo's scans.
    pub skus: Vec<String>,

    /// Fixture set to price instead of the built-in demo
    #[arg(short, long, env = "TILL_FIXTURE")]
    pub fixture: Option<String>,

    /// Directory holding the products, rules and scans fixtures
    #[arg(long, env = "TILL_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Print an itemised receipt before the total
    #[arg(short, long)]
    pub receipt: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl TillConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
