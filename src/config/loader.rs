//! Configuration loader for atlas-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "ATLAS_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "ATLAS_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ATLAS";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `ATLAS_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`ATLAS_CONFIG_DIR`)
    /// - Specific configuration file (`ATLAS_CONFIG_FILE`)
    /// - Application environment (`ATLAS_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `ATLAS_CONFIG_DIR` and `ATLAS_CONFIG_FILE` are set,
    /// as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        // Check mutual exclusivity
        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "ATLAS_CONFIG_DIR and ATLAS_CONFIG_FILE cannot both be set. \
                 Use ATLAS_CONFIG_DIR for layered configuration or \
                 ATLAS_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Create a loader that reads a single configuration file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the application environment
    ///
    /// CLI `--env` takes precedence over `ATLAS_APP_ENV`. The override is
    /// threaded through the loader rather than written back into the process
    /// environment.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If a specific configuration file was selected, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` is not found (when using layered loading)
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        // Validate the loaded settings
        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            // Single file mode
            self.add_file_source(builder, config_file, true)?
        } else {
            // Layered loading mode
            self.build_layered_config(builder)?
        };

        // Add environment variables (always highest priority)
        // ATLAS_SERVER__PORT -> server.port
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        // 1. Add default.toml (required)
        let default_path = self.config_dir.join("default.toml");
        let builder = self.add_file_source(builder, &default_path, true)?;

        // 2. Add {environment}.toml (optional)
        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = self.add_file_source(builder, &env_path, false)?;

        // 3. Add local.toml (optional)
        let local_path = self.config_dir.join("local.toml");
        let builder = self.add_file_source(builder, &local_path, false)?;

        Ok(builder)
    }

    /// Add a file source to the config builder
    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        if path.exists() {
            Ok(builder.add_source(File::from(path)))
        } else {
            Ok(builder)
        }
    }

    /// Add the environment variable source to the config builder
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    fn loader_for(dir: &Path) -> ConfigLoader {
        ConfigLoader {
            config_dir: dir.to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Development,
        }
    }

    #[test]
    fn test_load_requires_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_for(dir.path());

        let result = loader.load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [server]
            port = 4000

            [database]
            url = "postgres://localhost/atlas_test"
            "#,
        );

        let loader = loader_for(dir.path());
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.database.url, "postgres://localhost/atlas_test");
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [server]
            port = 4000

            [database]
            url = "postgres://localhost/atlas_test"
            "#,
        );
        write_config(
            dir.path(),
            "development.toml",
            r#"
            [server]
            port = 5000
            "#,
        );

        let loader = loader_for(dir.path());
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn test_local_file_overrides_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [database]
            url = "postgres://localhost/atlas_test"
            "#,
        );
        write_config(dir.path(), "development.toml", "[server]\nport = 5000\n");
        write_config(dir.path(), "local.toml", "[server]\nport = 6000\n");

        let loader = loader_for(dir.path());
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 6000);
    }

    #[test]
    fn test_single_file_mode() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "standalone.toml",
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://localhost/atlas_test"
            "#,
        );

        let loader = ConfigLoader::from_file(dir.path().join("standalone.toml"));
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn test_single_file_mode_missing_file() {
        let loader = ConfigLoader::from_file("/nonexistent/atlas.toml");
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_with_environment_override() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [database]
            url = "postgres://localhost/atlas_test"
            "#,
        );
        write_config(dir.path(), "production.toml", "[server]\nport = 8443\n");

        let loader = loader_for(dir.path()).with_environment(AppEnvironment::Production);
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 8443);
    }
}
