//! Merges CLI argument overrides into file-based configuration
//!
//! Precedence, highest first: command flags, global flags, environment
//! variables, configuration files.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration honouring `--config` and `--env`.
    ///
    /// Validation is deferred to `merge_cli_args` so flags such as
    /// `--backend memory` can still repair the loaded settings.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path.clone());
        }
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        Ok(Self::new(loader.load_unvalidated()?))
    }

    /// Apply CLI overrides on top of the base configuration and validate.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            backend,
            log_level,
            dry_run: _,
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(backend) = backend {
                config.database.backend = (*backend).into();
            }
            if let Some(level) = log_level {
                config.logger.level = (*level).into();
            }
        }

        config.validate()?;

        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use clap::Parser;

    fn merger() -> ConfigurationMerger {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/users".to_string();
        ConfigurationMerger::new(config)
    }

    fn merge(args: &[&str]) -> Result<Settings, ConfigError> {
        let cli = Cli::try_parse_from(args).unwrap();
        merger().merge_cli_args(&cli)
    }

    #[test]
    fn test_no_flags_keep_base_config() {
        let merged = merge(&["userhub"]).unwrap();
        assert_eq!(&merged, merger().config());
    }

    #[test]
    fn test_verbose_and_quiet_flags() {
        assert_eq!(merge(&["userhub", "--verbose"]).unwrap().logger.level, "debug");
        assert_eq!(merge(&["userhub", "--quiet"]).unwrap().logger.level, "error");
    }

    #[test]
    fn test_serve_overrides() {
        let merged = merge(&[
            "userhub", "serve", "--host", "0.0.0.0", "--port", "8080", "--backend", "memory",
        ])
        .unwrap();

        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 8080);
        assert_eq!(merged.database.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&["userhub", "--verbose", "serve", "--log-level", "warn"]).unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_memory_backend_rescues_missing_url() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(["userhub", "serve"]).unwrap();
        assert!(merger.merge_cli_args(&cli).is_err());

        let cli = Cli::try_parse_from(["userhub", "serve", "--backend", "memory"]).unwrap();
        assert!(merger.merge_cli_args(&cli).is_ok());
    }
}
