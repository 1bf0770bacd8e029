//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Article fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] gleaner_fetch::FetchError),

    /// Dataset storage error
    #[error("Dataset error: {0}")]
    Dataset(#[from] gleaner_dataset::DatasetError),

    /// Extraction pipeline error
    #[error("Extraction error: {0}")]
    Orchestration(#[from] gleaner_extractor::OrchestrationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The run was interrupted before it finished
    #[error("Interrupted")]
    Interrupted,
}
