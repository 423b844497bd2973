//! Merging of CLI argument overrides onto loaded configuration
//!
//! CLI arguments take the highest precedence, above configuration files and
//! environment variables.

use crate::cli::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::loader::ConfigLoader;
use crate::config::settings::Settings;

/// Applies CLI overrides on top of file- and environment-sourced settings.
pub struct ConfigurationMerger {
    settings: Settings,
}

impl ConfigurationMerger {
    /// Load base settings for the given CLI invocation.
    ///
    /// `--config FILE` selects single-file loading; otherwise the layered
    /// configuration directory is used. `--env` overrides `ATLAS_APP_ENV`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_ref() {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };

        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        Ok(Self {
            settings: loader.load()?,
        })
    }

    /// Merge CLI argument overrides into the loaded settings.
    ///
    /// Precedence within the CLI itself: `--log-level` beats `--verbose` and
    /// `--quiet`.
    pub fn merge_cli_args(mut self, cli: &Cli) -> Result<Settings, ConfigError> {
        if cli.verbose {
            self.settings.logger.level = "debug".to_string();
        }
        if cli.quiet {
            self.settings.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                self.settings.server.host = host.clone();
            }
            if let Some(port) = port {
                self.settings.server.port = *port;
            }
            if let Some(level) = log_level {
                self.settings.logger.level = String::from(*level);
            }
        }

        self.settings.validate()?;
        Ok(self.settings)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;

    fn write_config(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("atlas.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 4000

            [database]
            url = "postgres://localhost/atlas_test"
            "#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_cli_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(dir.path());

        let cli = Cli::try_parse_from([
            "atlas-rs",
            "--config",
            config_path.to_str().unwrap(),
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();

        let settings = ConfigurationMerger::from_cli(&cli)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.database.url, "postgres://localhost/atlas_test");
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(dir.path());

        let cli = Cli::try_parse_from([
            "atlas-rs",
            "--config",
            config_path.to_str().unwrap(),
            "--verbose",
        ])
        .unwrap();

        let settings = ConfigurationMerger::from_cli(&cli)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();

        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_log_level_flag_beats_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(dir.path());

        let cli = Cli::try_parse_from([
            "atlas-rs",
            "--config",
            config_path.to_str().unwrap(),
            "--quiet",
            "serve",
            "--log-level",
            "trace",
        ])
        .unwrap();

        let settings = ConfigurationMerger::from_cli(&cli)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();

        assert_eq!(settings.logger.level, "trace");
    }
}
