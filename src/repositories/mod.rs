//! Repository layer for data access operations.
//!
//! Records live behind the `UserStore` trait so handlers never see the backend.

mod user_store;

pub use user_store::{InMemoryUserStore, UserStore};

use std::sync::Arc;

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps the reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserStore>,
}

impl Repositories {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Repositories backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
