//! Configuration module for the monkey CLI.
//!
//! This module locates and loads configuration settings for the REPL and
//! the token dump command.

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{ReplError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "monkey.toml";

/// Prompt shown before each REPL line.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// REPL-specific configuration.
    #[serde(default)]
    pub repl: ReplConfig,

    /// Token output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// REPL-specific configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt printed before reading each line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the welcome banner.
    #[serde(default = "default_true")]
    pub greeting: bool,
}

/// Token output options shared by all commands.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// How each token is rendered.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            greeting: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/monkey/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReplError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ReplError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("monkey").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("monkey").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.repl.prompt, ">> ");
        assert!(config.repl.greeting);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("monkey.toml");
        std::fs::write(
            &config_path,
            "[repl]\nprompt = \"monkey> \"\ngreeting = false\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let expected = Config {
            repl: ReplConfig {
                prompt: "monkey> ".to_string(),
                greeting: false,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
            },
        };
        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("monkey.toml");
        std::fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.repl, ReplConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("monkey.toml");
        std::fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(ReplError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/monkey.toml"));
        assert!(result.is_err());
    }
}
