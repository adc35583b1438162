//! Command dispatch after parsing and configuration loading

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Privileged ports below this need elevated rights on most systems
const FIRST_UNPRIVILEGED_PORT: u16 = 1024;

/// Execute the parsed command with merged settings
///
/// A plain `serve` returns immediately; the caller starts the server.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            warn_on_privileged_port(&settings);
            ServeCommandHandler::new(settings).validate_only().await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
    }
}

fn warn_on_privileged_port(settings: &Settings) {
    if settings.server.port < FIRST_UNPRIVILEGED_PORT {
        eprintln!(
            "Warning: binding to port {} typically requires root privileges",
            settings.server.port
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/users".to_string();
        config.jwt.secret = "0123456789abcdef0123456789abcdef".to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["userhub", "serve", "--dry-run"]).unwrap();
        assert!(execute_command(&cli, valid_config()).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run_without_secret_fails() {
        let cli = Cli::try_parse_from(["userhub", "serve", "--dry-run"]).unwrap();
        let mut config = valid_config();
        config.jwt.secret.clear();

        assert!(execute_command(&cli, config).await.is_err());
    }

    #[tokio::test]
    async fn test_execute_plain_serve_is_a_no_op() {
        let cli = Cli::try_parse_from(["userhub", "serve"]).unwrap();
        assert!(execute_command(&cli, valid_config()).await.is_ok());
    }
}
