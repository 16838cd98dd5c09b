//! Serve command handler
//!
//! Handles the serve command's dry-run mode. Actual startup is done by
//! `server::Server` from `main`.

use crate::config::settings::Settings;
use crate::error::AppResult;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command
    ///
    /// With `dry_run` the configuration is validated and summarized;
    /// otherwise this returns immediately and `main` starts the server.
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            self.validate_only()
        } else {
            Ok(())
        }
    }

    /// Validate configuration without starting the server
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        for line in self.summary() {
            println!("{}", line);
        }
        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    /// Human-readable lines describing the validated configuration
    pub fn summary(&self) -> Vec<String> {
        let store = &self.config.store;
        let seeding = if store.seed_defaults {
            format!("{} seed user(s)", store.seed.len())
        } else {
            "seeding disabled".to_string()
        };

        vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Server would bind to: {}", self.config.server.address()),
            format!(
                "✓ Request timeout: {}s, access log: {}",
                self.config.server.request_timeout,
                if self.config.server.access_log { "on" } else { "off" }
            ),
            format!("✓ User store: in-memory, {}", seeding),
            format!("✓ Logger level: {}", self.config.logger.level),
        ]
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}
