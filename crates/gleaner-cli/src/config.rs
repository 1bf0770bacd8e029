//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted for the extractor API key before the
/// config file.
pub const API_KEY_ENV: &str = "GLEANER_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation model settings
    #[serde(default)]
    pub extractor: ExtractorSettings,

    /// Fact-checker model settings
    #[serde(default)]
    pub checker: CheckerSettings,

    /// Default run parameters
    #[serde(default)]
    pub defaults: RunDefaults,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Generation model endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorSettings {
    /// OpenAI-compatible base URL
    #[serde(default = "default_extractor_url")]
    pub base_url: String,

    /// API key; the environment variable takes precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_extractor_model")]
    pub model: String,
}

/// Fact-checker model endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerSettings {
    /// OpenAI-compatible base URL (typically a local Ollama instance)
    #[serde(default = "default_checker_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_checker_model")]
    pub model: String,
}

/// Default run parameters, overridable per command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunDefaults {
    /// Verify extracted points and regenerate on inaccuracies
    #[serde(default)]
    pub auto_check: bool,

    /// Total extraction attempts allowed per article
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Back up the dataset file before overwriting it
    #[serde(default = "default_true")]
    pub backup: bool,

    /// Points checked concurrently during verification
    #[serde(default = "default_parallel_checks")]
    pub parallel_checks: usize,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".gleaner").join("config.toml"))
    }

    /// Load configuration from the default location, or defaults when no
    /// file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the extractor API key: environment first, config file second.
    pub fn extractor_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.extractor.api_key.clone())
    }

    /// Set a configuration value by dotted key, e.g. `extractor.model`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "extractor.base_url" => self.extractor.base_url = value.to_string(),
            "extractor.api_key" => self.extractor.api_key = Some(value.to_string()),
            "extractor.model" => self.extractor.model = value.to_string(),
            "checker.base_url" => self.checker.base_url = value.to_string(),
            "checker.model" => self.checker.model = value.to_string(),
            "defaults.auto_check" => self.defaults.auto_check = parse_value(key, value)?,
            "defaults.max_attempts" => self.defaults.max_attempts = parse_value(key, value)?,
            "defaults.backup" => self.defaults.backup = parse_value(key, value)?,
            "defaults.parallel_checks" => self.defaults.parallel_checks = parse_value(key, value)?,
            "settings.color" => self.settings.color = parse_value(key, value)?,
            "settings.history_size" => self.settings.history_size = parse_value(key, value)?,
            _ => {
                return Err(CliError::InvalidInput(format!(
                    "Unknown configuration key '{}'",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Invalid value '{}' for '{}'", value, key)))
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            base_url: default_extractor_url(),
            api_key: None,
            model: default_extractor_model(),
        }
    }
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            base_url: default_checker_url(),
            model: default_checker_model(),
        }
    }
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            auto_check: false,
            max_attempts: default_max_attempts(),
            backup: true,
            parallel_checks: default_parallel_checks(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_extractor_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_extractor_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_checker_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_checker_model() -> String {
    "bespoke-minicheck".to_string()
}

fn default_max_attempts() -> u32 {
    2
}

fn default_parallel_checks() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extractor.model, "gpt-3.5-turbo");
        assert_eq!(config.checker.model, "bespoke-minicheck");
        assert!(!config.defaults.auto_check);
        assert_eq!(config.defaults.max_attempts, 2);
        assert!(config.settings.color);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.defaults.auto_check = true;
        config.extractor.model = "gpt-4o-mini".to_string();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert!(back.defaults.auto_check);
        assert_eq!(back.extractor.model, "gpt-4o-mini");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[extractor]\nmodel = \"custom\"\n").unwrap();
        assert_eq!(config.extractor.model, "custom");
        assert_eq!(config.extractor.base_url, "https://api.openai.com/v1");
        assert_eq!(config.checker.model, "bespoke-minicheck");
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("extractor.model", "gpt-4").unwrap();
        config.set_value("defaults.max_attempts", "3").unwrap();
        config.set_value("defaults.auto_check", "true").unwrap();
        assert_eq!(config.extractor.model, "gpt-4");
        assert_eq!(config.defaults.max_attempts, 3);
        assert!(config.defaults.auto_check);
    }

    #[test]
    fn test_set_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(config.set_value("nonsense.key", "x").is_err());
    }

    #[test]
    fn test_set_invalid_value_rejected() {
        let mut config = Config::default();
        assert!(config.set_value("defaults.max_attempts", "many").is_err());
    }
}
