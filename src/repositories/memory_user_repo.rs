//! In-memory user repository.
//!
//! Backs the `memory` database backend and the test suite. Uniqueness is
//! checked and the record inserted under a single write lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::repositories::UserStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    /// Keyed by id so listing is naturally ordered.
    users: BTreeMap<i32, User>,
}

/// Thread-safe in-memory user store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        if inner
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(AppError::Duplicate {
                entity: "users".to_string(),
                field: "username".to_string(),
                value: new_user.username,
            });
        }

        inner.next_id += 1;
        let now = Timestamp::now();
        let user = User {
            id: inner.next_id,
            username: new_user.username,
            password: new_user.password,
            email: new_user.email,
            full_name: new_user.full_name,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let removed = inner.users.len() as u64;
        inner.users.clear();
        Ok(removed)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
