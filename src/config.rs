//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::host::DEFAULT_ELEMENT_ID;

/// How display updates are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rewrite one terminal line in place
    #[default]
    Text,
    /// One JSON object per update
    Json,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "verify-countdown")]
#[command(about = "Count a display element down to an expired label, once per second")]
#[command(version)]
pub struct Config {
    /// Initial seconds remaining, as the raw data-remaining attribute value
    #[arg(short, long, conflicts_with = "page")]
    pub remaining: Option<String>,

    /// HTML page to read the countdown element from
    #[arg(short = 'P', long)]
    pub page: Option<PathBuf>,

    /// Id of the countdown element
    #[arg(short, long, default_value = DEFAULT_ELEMENT_ID)]
    pub element_id: String,

    /// Output format for display updates
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Tracing filter directive for this crate
    pub fn log_filter(&self) -> String {
        format!("verify_countdown={}", self.log_level())
    }
}
