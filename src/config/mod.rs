//! Configuration management for Clarifi

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, key_to_string};

use crate::catalog::ModelCatalog;
use crate::editor::DEFAULT_MAX_LENGTH;
use crate::paths;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of characters the editor accepts
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Delay of the simulated analysis, in milliseconds
    #[serde(default = "default_analysis_delay")]
    pub analysis_delay_ms: u64,

    /// Event loop tick in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// JSON model catalog to use instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

const fn default_analysis_delay() -> u64 {
    1500
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            analysis_delay_ms: default_analysis_delay(),
            poll_interval_ms: default_poll_interval(),
            catalog_path: None,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, parsing or validating the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_file()
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    ///
    /// Returns an error if the editor cap is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            bail!("max_length must be a positive number of characters");
        }
        Ok(())
    }

    /// Simulated analysis delay
    #[must_use]
    pub const fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Build the model catalog this config points at
    ///
    /// # Errors
    ///
    /// Returns an error if `catalog_path` is set and cannot be loaded
    pub fn catalog(&self) -> Result<ModelCatalog> {
        self.catalog_path
            .as_deref()
            .map_or_else(|| Ok(ModelCatalog::builtin()), ModelCatalog::load_from)
    }
}
