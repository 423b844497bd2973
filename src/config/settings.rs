//! Configuration settings structures for atlas-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "atlas-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/atlas.log".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation("server.host", "host cannot be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "port must be between 1 and 65535",
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Validate database configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "database URL cannot be empty",
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "max_connections must be greater than 0",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "min_connections cannot exceed max_connections",
            ));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub append: bool,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: true,
        }
    }
}

/// Logger configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level filter (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Console output
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the settings section into the logger's own configuration type
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = match self.format.to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::validation(
                    "logger.format".to_string(),
                    format!("unknown log format '{}', expected 'text' or 'json'", other),
                ));
            }
        };

        Ok(LoggerConfig {
            level: self.level,
            format,
            console: ConsoleConfig {
                enabled: self.console.enabled,
            },
            file: FileConfig {
                enabled: self.file.enabled,
                path: self.file.path.into(),
                append: self.file.append,
            },
        })
    }

    /// Validate logger configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.format.to_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::validation(
                    "logger.format".to_string(),
                    format!("unknown log format '{}'", other),
                ));
            }
        }
        match self.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(ConfigError::validation(
                "logger.level".to_string(),
                format!("unknown log level '{}'", other),
            )),
        }
    }
}

// ============================================================================
// Top-level Settings
// ============================================================================

/// Root settings structure aggregating all configuration sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/atlas".to_string();
        settings
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.database.min_connections, 1);
        assert!(!settings.database.auto_migrate);
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.logger.format, "text");
        assert!(settings.logger.console.enabled);
        assert!(!settings.logger.file.enabled);
    }

    #[test]
    fn test_server_address() {
        let mut settings = valid_settings();
        settings.server.host = "0.0.0.0".to_string();
        settings.server.port = 8080;
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate_accepts_valid_settings() {
        let mut settings = valid_settings();
        settings.logger.level = "info".to_string();
        settings.logger.format = "text".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut settings = valid_settings();
        settings.logger.level = "info".to_string();
        settings.logger.format = "text".to_string();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let mut settings = Settings::default();
        settings.logger.level = "info".to_string();
        settings.logger.format = "text".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let mut settings = valid_settings();
        settings.logger.level = "info".to_string();
        settings.logger.format = "text".to_string();
        settings.database.min_connections = 20;
        settings.database.max_connections = 5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let logger = LoggerSettings {
            level: "debug".to_string(),
            format: "json".to_string(),
            console: ConsoleSettings { enabled: false },
            file: FileSettings {
                enabled: true,
                path: "logs/test.log".to_string(),
                append: false,
            },
        };

        let config = logger.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.console.enabled);
        assert!(config.file.enabled);
        assert!(!config.file.append);
    }

    #[test]
    fn test_logger_settings_rejects_unknown_format() {
        let logger = LoggerSettings {
            level: "info".to_string(),
            format: "xml".to_string(),
            ..Default::default()
        };
        assert!(logger.into_logger_config().is_err());
    }
}
