use clap::Parser;

use userhub::cli::{Cli, Commands, execute_command, init_logger_from_settings, load_and_merge_config};
use userhub::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    match &cli.command {
        Some(Commands::Serve { dry_run: false, .. }) | None => {
            Server::new(settings).run().await?;
        }
        Some(_) => {
            execute_command(&cli, settings).await?;
        }
    }

    Ok(())
}
