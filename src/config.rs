//! Configuration module
//!
//! Reads TOML configuration from `~/.config/amora-users/config.toml`
//! (override with the `USERS_CONFIG` environment variable). Every section
//! has defaults so the service starts without a config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./users.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "info" or "amora_users=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Base URLs and timeout for the sibling microservices
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientsConfig {
    pub free_area_base_url: String,
    pub private_area_base_url: String,
    pub geo_base_url: String,
    /// Request timeout applied to every sibling call, in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self {
            free_area_base_url: "http://localhost:8002".to_string(),
            private_area_base_url: "http://localhost:8003".to_string(),
            geo_base_url: "http://localhost:8004".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Age thresholds for registration and filtered search
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgeConfig {
    pub adult: i64,
    pub senior: i64,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            adult: 18,
            senior: 99,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub clients: ClientsConfig,
    pub age: AgeConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config file location: `~/.config/amora-users/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("amora-users")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config_with_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9001

            [age]
            senior = 80
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.age.adult, 18);
        assert_eq!(cfg.age.senior, 80);
        assert_eq!(cfg.clients.timeout_seconds, 10);
    }
}
