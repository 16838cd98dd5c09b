//! User service for business logic operations.
//!
//! Validates payloads before they reach the store and turns absent
//! records into `NotFound` errors.

use std::sync::Arc;

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserStore;

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new UserService over the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Lists all users in insertion order.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.store.list().await)
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// Creates a new user.
    ///
    /// # Returns
    /// The stored user with its assigned id, or `Validation` error
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        new_user.validate()?;
        let user = self.store.create(new_user).await;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Replaces a user's name and email.
    ///
    /// The payload is checked before the lookup, so an invalid payload
    /// against an unknown id reports `Validation`.
    pub async fn update_user(&self, id: i32, update: UpdateUser) -> AppResult<User> {
        update.validate()?;
        let user = self
            .store
            .update(id, update)
            .await
            .ok_or_else(|| AppError::user_not_found(id))?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Deletes a user, or returns `NotFound` if the id is unknown.
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await {
            return Err(AppError::user_not_found(id));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Number of stored users.
    pub async fn count_users(&self) -> usize {
        self.store.count().await
    }

    /// Loads start-up records, skipping validation already done by config.
    pub async fn seed_users(&self, users: Vec<NewUser>) -> Vec<User> {
        self.store.seed(users).await
    }
}
