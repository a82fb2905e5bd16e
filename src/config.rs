//! Application configuration
//!
//! Loaded from a TOML file (default: ~/.config/fotovault/config.toml).
//! Every section and field falls back to a default, so a bare checkout
//! still runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
    pub admin: AdminSettings,
}

/// `[database]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./fotovault.db?mode=rwc".to_string(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing filter, overridden by RUST_LOG
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// `[admin]` section - seed values for the bootstrap admin account
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            email: "admin@fotovault.local".to_string(),
            password: "admin".to_string(),
            first_name: "Fotovault".to_string(),
            last_name: "Admin".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config file location (~/.config/fotovault/config.toml)
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fotovault")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert!(cfg.database.url.starts_with("sqlite://"));
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.admin.email.is_empty());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [admin]
            email = "root@photos.example"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.admin.email, "root@photos.example");
        assert_eq!(cfg.admin.first_name, "Fotovault");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load(Path::new("/nonexistent/fotovault.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
