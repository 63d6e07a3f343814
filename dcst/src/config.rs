//! Configuration module for the dcst CLI.
//!
//! This module handles loading configuration settings for the dcst
//! application from a `dcst.toml` file.

use dirs::{config_dir, home_dir};
use dotcss_lex::ScannerOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DcstError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "dcst.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scanner options.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Token listing options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which trivia the scanner reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Drop whitespace tokens.
    #[serde(default = "default_true")]
    pub ignore_whitespace: bool,

    /// Drop comment tokens.
    #[serde(default)]
    pub ignore_comment: bool,
}

/// How token listings are printed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Listing format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix text lines with `line:column`.
    #[serde(default)]
    pub positions: bool,
}

/// Supported listing formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `kind<TAB>lexeme` line per token
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for ScannerConfig {
    fn default() -> Self {
        let options = ScannerOptions::default();
        Self {
            ignore_whitespace: options.ignore_whitespace,
            ignore_comment: options.ignore_comment,
        }
    }
}

impl ScannerConfig {
    /// Converts to the scanner's own options type.
    pub fn options(&self) -> ScannerOptions {
        ScannerOptions::default()
            .with_ignore_whitespace(self.ignore_whitespace)
            .with_ignore_comment(self.ignore_comment)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory (`~/.config/dcst/`)
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
            return Err(DcstError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DcstError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("dcst").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("dcst").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
