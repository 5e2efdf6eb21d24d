//! Calculator configuration.
//!
//! Every field has a default, so an empty or partial TOML file is valid:
//!
//! ```toml
//! theme_key = "calculatorTheme"
//! history_key = "calculatorHistory"
//! default_dark_mode = true
//! highlight_millis = 100
//! data_dir = "/var/lib/calcmaster"
//! ```

use crate::storage::{HISTORY_KEY, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Storage key of the theme preference.
    pub theme_key: String,
    /// Storage key of the calculation history.
    pub history_key: String,
    /// Theme used when no preference has been stored yet.
    pub default_dark_mode: bool,
    /// How long a pressed key keeps its button highlighted.
    pub highlight_millis: u64,
    /// Directory for `FileStore`. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_KEY.to_string(),
            history_key: HISTORY_KEY.to_string(),
            default_dark_mode: true,
            highlight_millis: 100,
            data_dir: None,
        }
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Load `path` if it exists, otherwise use defaults. Invalid files are
    /// logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "falling back to default config");
                Self::default()
            }
        }
    }

    /// `<config dir>/calcmaster/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcmaster").join("config.toml"))
    }

    /// Directory for file-backed storage.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("calcmaster")))
    }

    pub fn highlight_delay(&self) -> chrono::Duration {
        let millis = u32::try_from(self.highlight_millis).unwrap_or(u32::MAX);
        chrono::Duration::milliseconds(i64::from(millis))
    }
}
