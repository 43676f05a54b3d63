use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "factwatch",
    about = "Mirror fact-checking state and verify claims from the terminal",
    version,
    author,
    long_about = None
)]
pub struct FactWatchCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the config file and FACTWATCH_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the service and keep the dashboard up to date
    Watch {
        /// Poll period in milliseconds
        #[arg(short, long)]
        period_ms: Option<u64>,

        /// Run a single sync, print it and exit
        #[arg(long, default_value = "false")]
        once: bool,
    },

    /// Submit text for verification
    Verify {
        /// Text to verify; prompted for when omitted
        text: Option<String>,
    },

    /// Check that the service is up
    Health,

    /// Ask the service to queue a stored claim for manual verification
    Queue {
        /// Claim id
        claim_id: String,
    },
}
