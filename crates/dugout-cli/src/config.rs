//! Command-line configuration for the console binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Command-line options accepted by the `dugout` console.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dugout",
    version,
    about = "Line-oriented console for a baseball league record book"
)]
pub struct Cli {
    /// SQLite database path; pass `:memory:` for a throwaway league.
    #[arg(long, value_name = "PATH", default_value = "dugout.db")]
    pub db: PathBuf,

    /// Log filter directive, e.g. `info` or `dugout_league=debug`.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_filter: String,

    /// Format of log events written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Format of responses written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Supported log event encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single-line human-readable events.
    Compact,
    /// One JSON object per event.
    Json,
}
