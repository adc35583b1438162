//! User service for business logic operations.
//!
//! Owns the decision logic behind the user endpoints: username
//! normalisation, the uniqueness check, password hashing and delegation
//! to the [`UserStore`].

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::repositories::UserStore;
use crate::utils::password::PasswordHasher;

/// Result of a create request that did not fail unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(User),
    UsernameTaken,
}

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

/// Usernames are stored and compared in lowercase.
pub fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}

impl UserService {
    /// Creates a new UserService with the given store and hasher.
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Creates a new user.
    ///
    /// The username is lowercased before both the existence check and the
    /// insert, so names differing only by case collide. The store's atomic
    /// insert is the final arbiter for concurrent requests.
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<CreateUserOutcome> {
        let username = normalize_username(&new_user.username);

        if self.store.find_by_username(&username).await?.is_some() {
            tracing::info!(username = %username, "Username already taken");
            return Ok(CreateUserOutcome::UsernameTaken);
        }

        let password = self.hasher.hash(&new_user.password).await?;
        let record = NewUser {
            username,
            password,
            ..new_user
        };

        match self.store.create(record).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "User created");
                Ok(CreateUserOutcome::Created(user))
            }
            Err(AppError::Duplicate { value, .. }) => {
                tracing::info!(username = %value, "Username taken by a concurrent create");
                Ok(CreateUserOutcome::UsernameTaken)
            }
            Err(e) => Err(e),
        }
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.list_all().await
    }

    /// Gets a user by username, verbatim.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.store.find_by_username(username).await
    }

    /// Deletes every user, returning how many were removed.
    pub async fn delete_all_users(&self) -> AppResult<u64> {
        let removed = self.store.delete_all().await?;
        tracing::warn!(removed, "All users deleted");
        Ok(removed)
    }

    /// Checks a username/password pair.
    ///
    /// # Returns
    /// The user when the credentials match, `None` otherwise
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let username = normalize_username(username);
        let Some(user) = self.store.find_by_username(&username).await? else {
            return Ok(None);
        };

        if self.hasher.verify(password, &user.password).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Probes the underlying store.
    pub async fn ping_store(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
