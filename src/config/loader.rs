use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variables that override the store URL, highest priority first.
pub const STORE_URL_ENV_VARS: [&str; 2] = ["SHOWCASE_STORE_URL", "SUPABASE_URL"];

/// Environment variables that override the store key, highest priority first.
pub const STORE_KEY_ENV_VARS: [&str; 2] = ["SHOWCASE_STORE_KEY", "SUPABASE_ANON_KEY"];

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/showcase/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("showcase").join("config.toml")
    }

    /// Loads, overrides from the environment and validates the default
    /// config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Same as [`Config::load`] for an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_from(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a config file without validating it.
    ///
    /// A missing file yields `Config::default()`.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Applies store overrides using `lookup` to resolve variable names.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.trim().is_empty())
        };

        if let Some(url) = first_set(&STORE_URL_ENV_VARS[..]) {
            tracing::debug!(base_url = %url, "Store URL overridden from environment");
            self.store.base_url = url;
        }
        if let Some(key) = first_set(&STORE_KEY_ENV_VARS[..]) {
            tracing::debug!("Store key overridden from environment");
            self.store.anon_key = Some(key);
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The store URL is set and uses http or https
    /// - The table name is not empty
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.store.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "store.base_url is not set (config file or {})",
                    STORE_URL_ENV_VARS[0]
                ),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("store.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.store.table.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "store.table must not be empty".to_string(),
            });
        }

        if self.defaults.timeout_seconds == 0 || self.defaults.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
