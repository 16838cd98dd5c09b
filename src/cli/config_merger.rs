//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};
use std::path::Path;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file and environment values.
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Load the base configuration for the given CLI arguments
    ///
    /// `--config` selects single-file loading; otherwise the layered loader
    /// is driven by `ROSTER_*` variables. `--env` overrides `ROSTER_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_deref() {
            Some(path) => {
                Self::validate_config_file_access(path)?;
                ConfigLoader::from_file(path)
            }
            None => ConfigLoader::new()?,
        };

        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        let environment = loader.environment();
        Ok(Self::new(loader.load()?, environment))
    }

    /// Validate that the configuration file is accessible and readable
    fn validate_config_file_access(path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!(
                    "Configuration file does not exist or is not a file: '{}'",
                    path.display()
                ),
            });
        }

        std::fs::File::open(path)
            .map(|_| ())
            .map_err(|e| ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read configuration file '{}': {}", path.display(), e),
            })
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// The merged settings are validated again, since overrides can
    /// break rules the loaded file satisfied.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                no_seed,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                // Command-specific level wins over --verbose/--quiet
                if let Some(level) = log_level {
                    config.logger.level = level.as_str().to_string();
                }

                if *no_seed {
                    config.store.seed_defaults = false;
                }
            }
        }
    }

    /// The configuration as loaded, before CLI overrides
    pub fn config(&self) -> &Settings {
        &self.base_config
    }

    /// Environment the configuration was loaded for
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn merger() -> ConfigurationMerger {
        ConfigurationMerger::new(Settings::default(), Environment::Development)
    }

    fn merge(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        merger().merge_cli_args(&cli).unwrap()
    }

    #[test]
    fn test_configuration_merger_new() {
        let base_config = Settings::default();
        let merger = ConfigurationMerger::new(base_config.clone(), Environment::Test);
        assert_eq!(merger.config(), &base_config);
        assert_eq!(merger.environment(), Environment::Test);
    }

    #[test]
    fn test_merge_verbose_and_quiet_flags() {
        assert_eq!(merge(&["roster-rs", "--verbose"]).logger.level, "debug");
        assert_eq!(merge(&["roster-rs", "--quiet"]).logger.level, "error");
    }

    #[test]
    fn test_merge_serve_host_and_port() {
        let config = merge(&["roster-rs", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let config = merge(&["roster-rs", "--verbose", "serve", "--log-level", "warn"]);
        assert_eq!(config.logger.level, "warn");
    }

    #[test]
    fn test_no_seed_disables_seeding() {
        let config = merge(&["roster-rs", "serve", "--no-seed"]);
        assert!(!config.store.seed_defaults);
        assert!(config.store.seed_users().is_empty());

        let config = merge(&["roster-rs", "serve"]);
        assert!(config.store.seed_defaults);
    }

    #[test]
    fn test_from_cli_with_config_file() {
        let _guard = crate::config::loader::tests::TEST_MUTEX
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4100\n\n[store]\nseed_defaults = false").unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["roster-rs", "--config", path, "--env", "test"]).unwrap();

        let merger = ConfigurationMerger::from_cli(&cli).unwrap();
        assert_eq!(merger.config().server.port, 4100);
        assert!(!merger.config().store.seed_defaults);
        assert_eq!(merger.environment(), Environment::Test);
    }
}
