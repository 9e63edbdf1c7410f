//! Command-line / environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use playbill_observability::LogFormat;

/// Statement output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report.
    #[default]
    Text,
    /// JSON array of statements.
    Json,
}

/// Render billing statements for theater-performance invoices.
#[derive(Debug, Clone, Parser)]
#[command(name = "playbill-statement", version, about)]
pub struct StatementConfig {
    /// Play table: JSON object keyed by play id.
    #[arg(long, env = "PLAYBILL_PLAYS", default_value = "plays.json")]
    pub plays: PathBuf,

    /// Invoices: JSON array of invoices (or a single invoice object).
    #[arg(long, env = "PLAYBILL_INVOICES", default_value = "invoices.json")]
    pub invoices: PathBuf,

    #[arg(long, env = "PLAYBILL_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log line format (pretty or json). Filtering is controlled by RUST_LOG.
    #[arg(long, env = "PLAYBILL_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}
