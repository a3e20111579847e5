//! # insights-config
//!
//! Layered configuration loading for the insights server using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INSIGHTS_*` prefix, `__` as separator)
//! 2. `SERVER_PORT` (legacy name for `server.port`)
//! 3. Project-level `insights.toml`
//! 4. User-level `~/.config/insights/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INSIGHTS_SERVER__PORT` -> `server.port` and
//! `INSIGHTS_DATABASE__PATH` -> `database.path`.
//!
//! # Usage
//!
//! ```no_run
//! use insights_config::InsightsConfig;
//!
//! let config = InsightsConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, IN_MEMORY};
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, resolved against the working directory.
pub const PROJECT_CONFIG_FILE: &str = "insights.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InsightsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl InsightsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from a caller-assembled figment.
    ///
    /// The server uses this after layering command-line overrides on top of
    /// [`figment`](Self::figment).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: legacy port variable
        figment = figment.merge(
            Env::raw()
                .only(&["SERVER_PORT"])
                .map(|_| "server.port".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("INSIGHTS_").split("__"))
    }

    /// Reject values that extract cleanly but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("insights").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = InsightsConfig::default();
        config.validate().unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn port_zero_is_rejected() {
        let mut config = InsightsConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.port"));
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let mut config = InsightsConfig::default();
        config.database.path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
