//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::JwtConfig;
use crate::repositories::UserStore;
use crate::services::Services;
use crate::utils::password::PasswordHasher;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState over a user store and JWT config.
    ///
    /// # Example
    /// ```ignore
    /// let store = Arc::new(MemoryUserRepository::new());
    /// let state = AppState::new(store, jwt_config, PasswordHasher::default());
    /// ```
    pub fn new(store: Arc<dyn UserStore>, jwt_config: JwtConfig, hasher: PasswordHasher) -> Self {
        Self {
            services: Services::new(store, hasher),
            jwt_config,
        }
    }
}
