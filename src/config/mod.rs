//! Configuration loading, environment overrides and credentials.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::{ConfigError, STORE_KEY_ENV_VARS, STORE_URL_ENV_VARS};
pub use types::{Config, ControllerConfig, Defaults, StoreConfig};
