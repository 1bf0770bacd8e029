//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gleaner CLI - Curate fact-checked key-point datasets from web articles.
#[derive(Debug, Parser)]
#[command(name = "gleaner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract key points from articles into a dataset
    Extract(ExtractArgs),

    /// Re-verify the key points of an existing dataset
    Verify(VerifyArgs),

    /// Show dataset verification statistics
    Stats(StatsArgs),

    /// Convert a dataset to ShareGPT format
    Convert(ConvertArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Enter interactive mode
    Repl,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Article URLs to process
    pub urls: Vec<String>,

    /// Read URLs from file (one per line)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Dataset file to append to
    #[arg(short, long, default_value = "dataset.json")]
    pub dataset: PathBuf,

    /// Fact-check each point and regenerate on inaccuracies
    #[arg(long)]
    pub verify: bool,

    /// Total extraction attempts allowed per article
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Skip the dataset backup before the first write
    #[arg(long)]
    pub no_backup: bool,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Dataset file to verify
    #[arg(short, long, default_value = "dataset.json")]
    pub dataset: PathBuf,

    /// Output file (defaults to `<dataset>_verified.json`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the output backup before writing
    #[arg(long)]
    pub no_backup: bool,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Dataset file to inspect
    #[arg(short, long, default_value = "dataset.json")]
    pub dataset: PathBuf,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Dataset file to convert
    #[arg(short, long, default_value = "dataset.json")]
    pub dataset: PathBuf,

    /// Output file for the converted dataset
    #[arg(short, long, default_value = "dataset_sharegpt.json")]
    pub output: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Dotted key, e.g. extractor.model
        key: String,
        /// New value
        value: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
