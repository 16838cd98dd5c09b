//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Effective configuration the server was started with
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new AppState over existing repositories.
    pub fn new(repos: Repositories, settings: Settings) -> Self {
        Self {
            services: Services::new(repos),
            settings: Arc::new(settings),
        }
    }

    /// Builds an in-memory store and loads the configured seed users.
    ///
    /// # Example
    /// ```ignore
    /// let state = AppState::in_memory(settings).await;
    /// ```
    pub async fn in_memory(settings: Settings) -> Self {
        let seeds = settings.store.seed_users();
        let state = Self::new(Repositories::in_memory(), settings);

        let seeded = state.services.users.seed_users(seeds).await;
        tracing::info!(count = seeded.len(), "Seeded user store");

        state
    }
}
