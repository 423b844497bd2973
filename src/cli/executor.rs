//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// Dispatches to the appropriate command handler based on the parsed CLI
/// arguments. The serve command (and the default, no subcommand) returns
/// Ok immediately and leaves the actual server startup to main.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(crate::error::AppError::Validation {
            field: "cli_arguments".to_string(),
            reason: msg,
        });
    }

    if let Some(Commands::Migrate { rollback, .. }) = &cli.command
        && let Some(steps) = rollback
        && *steps > 50
    {
        eprintln!(
            "Warning: Rolling back {} migrations is a large operation. Consider using smaller steps.",
            steps
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/test".to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["atlas-rs", "serve", "--dry-run"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_serve_normal() {
        let cli = Cli::try_parse_from(["atlas-rs", "serve"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_default_command() {
        let cli = Cli::try_parse_from(["atlas-rs"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_privileged_port_combination() {
        let cli = Cli {
            command: Some(Commands::Serve {
                host: Some("0.0.0.0".to_string()),
                port: Some(80),
                log_level: None,
                dry_run: false,
            }),
            config: None,
            env: None,
            verbose: false,
            quiet: false,
        };

        let result = validate_command_args(&cli);
        assert!(result.is_err());
    }
}
