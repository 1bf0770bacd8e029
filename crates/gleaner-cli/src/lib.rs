//! Gleaner CLI library.
//!
//! This library provides the core functionality for the Gleaner command-line
//! interface: configuration management, command execution, and output
//! formatting over the extraction and verification pipeline.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
