//! Configuration management for ozz-commands.
//!
//! Handles loading help-dispatch settings from a TOML file. Every field has a
//! default, so an absent file or an empty table behaves like the built-in
//! configuration.

use crate::error::{CommandError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Help interception settings.
    #[serde(default)]
    pub help: HelpConfig,
}

/// How a command list treats the help keyword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HelpConfig {
    /// Leading token that prints aggregate help instead of dispatching.
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Whether printing help counts as a successful dispatch.
    #[serde(default)]
    pub help_is_success: bool,
}

fn default_keyword() -> String {
    "help".to_string()
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            help_is_success: false,
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ozz")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CommandError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_str(&content).map_err(|e| {
            CommandError::config(format!("Configuration error in {}:\n  {}", path.display(), e))
        })
    }

    /// Parses configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_str(content).map_err(CommandError::config)
    }

    fn parse_str(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let keyword = &self.help.keyword;
        if keyword.is_empty() || keyword.contains(char::is_whitespace) {
            return Err(format!(
                "help.keyword must be a single non-empty word, got {keyword:?}"
            ));
        }
        Ok(())
    }
}
