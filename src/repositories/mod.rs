//! Repository layer for data access operations.
//!
//! The user store is consumed through the [`UserStore`] trait so handlers
//! and services never depend on a concrete backend.

mod memory_user_repo;
mod user_repo;

pub use memory_user_repo::MemoryUserRepository;
pub use user_repo::UserRepository;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewUser, User};

/// Persistence contract for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Inserts a new user.
    ///
    /// Must be atomic with respect to username uniqueness: a collision is
    /// reported as `AppError::Duplicate` and leaves the store unchanged.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Returns every user ordered by id.
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Removes every user, returning how many rows were deleted.
    async fn delete_all(&self) -> AppResult<u64>;

    /// Cheap liveness probe of the backend.
    async fn ping(&self) -> AppResult<()>;
}
