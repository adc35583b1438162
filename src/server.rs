//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{DatabaseConfig, Settings, StorageBackend};
use crate::db::establish_async_connection_pool;
use crate::error::AppResult;
use crate::repositories::{MemoryUserRepository, UserRepository, UserStore};
use crate::state::AppState;
use crate::utils::password::PasswordHasher;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until a shutdown signal arrives
    ///
    /// # Errors
    /// - JWT configuration errors
    /// - Storage initialization errors
    /// - Address binding errors
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = self.settings;

        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            "Application starting"
        );

        tracing::info!(
            host = %settings.server.host,
            port = %settings.server.port,
            request_timeout = %settings.server.request_timeout,
            "Server configuration loaded"
        );

        // Secret stays out of the logs.
        tracing::info!(
            access_token_expiration = %settings.jwt.access_token_expiration,
            secret_configured = %(!settings.jwt.secret.is_empty()),
            bcrypt_cost = %settings.security.bcrypt_cost,
            "Security configuration loaded"
        );

        settings.jwt.validate().map_err(|e| {
            tracing::error!(error = %e, "JWT configuration validation failed");
            anyhow::anyhow!("JWT configuration validation failed: {}", e)
        })?;

        let store = build_store(&settings.database).await?;

        let hasher = PasswordHasher::new(settings.security.bcrypt_cost);
        let state = AppState::new(store, settings.jwt.clone(), hasher);

        let router = create_router(
            state,
            Duration::from_secs(settings.server.request_timeout),
        );

        let address = settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Builds the user store for the configured backend.
///
/// The postgres backend expects the `users` table to exist already.
async fn build_store(config: &DatabaseConfig) -> AppResult<Arc<dyn UserStore>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory user store, data is lost on shutdown");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
        StorageBackend::Postgres => {
            tracing::info!(
                max_connections = %config.max_connections,
                min_connections = %config.min_connections,
                connection_timeout = %config.connection_timeout,
                "Initializing database connection pool"
            );
            let pool = establish_async_connection_pool(config).await?;

            Ok(Arc::new(UserRepository::new(pool)))
        }
    }
}

/// Waits for Ctrl+C or SIGTERM.
///
/// A handler that fails to install is logged and never fires, so the other
/// signal still shuts the server down.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_store_starts_empty() {
        let config = DatabaseConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };

        let store = build_store(&config).await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.ping().await.is_ok());
    }
}
