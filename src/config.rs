//! Configuration module
//!
//! Loads `AppConfig` from a TOML file (default:
//! `~/.config/imobiliaria-service/config.toml`, overridable via the
//! `IMOBILIARIA_CONFIG` environment variable). Every section has sensible
//! defaults so a missing file still yields a runnable development setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

/// HTTP server section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub api_host: String,
    /// Port for the REST API
    pub api_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
        }
    }
}

/// Database section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Full connection URL. Takes precedence over `path` when set.
    pub url: Option<String>,
    /// SQLite file path used when `url` is not set
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            path: "./imobiliaria.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Resolve the effective connection URL
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

/// Security section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Secret used to sign JWT tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiration_hours: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            jwt_expiration_hours: 24,
        }
    }
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (e.g. "info", "imobiliaria_backoffice=debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default admin seeding section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            email: "admin@imobiliaria.local".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// Errors raised while loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let cfg = toml::from_str(&raw)?;
        Ok(cfg)
    }
}

/// Default config file location (`~/.config/imobiliaria-service/config.toml`)
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("imobiliaria-service")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.api_port, 8080);
        assert!(cfg.database.connection_url().starts_with("sqlite://"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9090

            [database]
            path = "/tmp/teste.db"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.database.connection_url(), "sqlite:///tmp/teste.db?mode=rwc");
        // untouched sections keep defaults
        assert_eq!(cfg.admin.username, "admin");
    }

    #[test]
    fn explicit_url_wins_over_path() {
        let settings = DatabaseSettings {
            url: Some("sqlite::memory:".to_string()),
            path: "ignored.db".to_string(),
        };
        assert_eq!(settings.connection_url(), "sqlite::memory:");
    }
}
