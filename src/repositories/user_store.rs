//! User store trait and its in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{NewUser, UpdateUser, User};

/// Storage backend for user records.
///
/// The store owns every record and hands out clones. Payloads are checked
/// by the service layer before they reach it, so no operation here fails.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<User>;

    async fn get(&self, id: i32) -> Option<User>;

    /// Stores the record under `max(existing ids) + 1`, or `1` when empty.
    async fn create(&self, new_user: NewUser) -> User;

    /// Overwrites name and email. `None` leaves the store untouched.
    async fn update(&self, id: i32, update: UpdateUser) -> Option<User>;

    /// Returns `false` when no record has the given id.
    async fn delete(&self, id: i32) -> bool;

    async fn count(&self) -> usize;

    /// Creates each record in order.
    async fn seed(&self, users: Vec<NewUser>) -> Vec<User> {
        let mut created = Vec::with_capacity(users.len());
        for user in users {
            created.push(self.create(user).await);
        }
        created
    }
}

/// `UserStore` backed by a vector behind a tokio `RwLock`.
///
/// Mutations hold the write lock for the whole read-modify-write, so
/// concurrent creates never compute the same id.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(users: &[User]) -> i32 {
    users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn get(&self, id: i32) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    async fn create(&self, new_user: NewUser) -> User {
        let mut users = self.users.write().await;
        let user = new_user.into_user(next_id(&users));
        users.push(user.clone());
        user
    }

    async fn update(&self, id: i32, update: UpdateUser) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.apply(update);
        Some(user.clone())
    }

    async fn delete(&self, id: i32) -> bool {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                true
            }
            None => false,
        }
    }

    async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
