use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Connection settings for the hosted record store.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project URL (e.g., "https://xyz.supabase.co").
    #[serde(default)]
    pub base_url: String,
    /// Collection holding the app records.
    #[serde(default = "default_table")]
    pub table: String,
    /// Public (anon) API key sent with every query.
    #[serde(default)]
    pub anon_key: Option<String>,
}

/// Network defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// App list controller behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Drop results of a fetch that was superseded by a newer refetch.
    /// Off by default: overlapping fetches are last-write-wins.
    #[serde(default)]
    pub discard_stale_responses: bool,
}

fn default_table() -> String {
    "apps".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Defaults {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            table: default_table(),
            anon_key: None,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

// Hand-written so the key never ends up in logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .field("anon_key", &self.credential())
            .finish()
    }
}
