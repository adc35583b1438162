//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod user_service;

pub use user_service::{CreateUserOutcome, UserService};

use std::sync::Arc;

use crate::repositories::UserStore;
use crate::utils::password::PasswordHasher;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
}

impl Services {
    /// Creates a new Services instance over the given store.
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self {
            users: UserService::new(store, hasher),
        }
    }
}
