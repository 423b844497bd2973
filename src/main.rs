use atlas_rs::cli::{self, Cli, Commands};
use atlas_rs::server::Server;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    let _log_handle = cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone()).await?;

    // Migrate and serve --dry-run complete inside their handlers; everything
    // else falls through to server startup.
    match cli.command {
        Some(Commands::Migrate { .. }) => Ok(()),
        Some(Commands::Serve { dry_run: true, .. }) => Ok(()),
        _ => Server::new(settings).run().await,
    }
}
