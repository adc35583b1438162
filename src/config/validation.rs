//! Configuration validation logic
//!
//! This module provides validation methods for the configuration structures
//! to ensure values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, FileSettings, LoggerSettings, SecurityConfig, ServerConfig, Settings,
    StorageBackend,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Accepted PostgreSQL URL schemes
const VALID_URL_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

/// Range accepted by bcrypt for the work factor
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// The URL is only checked for the postgres backend. Pool sizes are always
    /// checked so switching backends never uncovers a broken pool setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StorageBackend::Postgres {
            if self.url.is_empty() {
                return Err(ConfigError::validation(
                    "database.url",
                    "Database URL is required for the postgres backend.",
                ));
            }

            if !VALID_URL_SCHEMES.iter().any(|s| self.url.starts_with(s)) {
                return Err(ConfigError::validation(
                    "database.url",
                    "Invalid database URL format. Expected format: postgres://[user:password@]host[:port]/database",
                ));
            }
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        Ok(())
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::ValidationError {
                field: "security.bcrypt_cost".to_string(),
                message: format!(
                    "bcrypt cost {} is out of range ({}-{}).",
                    self.bcrypt_cost,
                    BCRYPT_COST_RANGE.start(),
                    BCRYPT_COST_RANGE.end()
                ),
            });
        }
        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered. JWT settings are checked
    /// separately by `serve`, which is the only command that signs tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.security.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postgres_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://localhost/users".to_string(),
            ..Default::default()
        }
    }

    fn valid_settings() -> Settings {
        Settings {
            database: postgres_config(),
            ..Default::default()
        }
    }

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_server_config_validation() {
        assert!(ServerConfig::default().validate().is_ok());

        let zero_port = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(field_of(zero_port.validate().unwrap_err()), "server.port");

        let zero_timeout = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        assert_eq!(
            field_of(zero_timeout.validate().unwrap_err()),
            "server.request_timeout"
        );
    }

    #[test]
    fn test_postgres_backend_requires_url() {
        let config = DatabaseConfig::default();
        assert_eq!(field_of(config.validate().unwrap_err()), "database.url");

        let bad_scheme = DatabaseConfig {
            url: "mysql://localhost/users".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(bad_scheme.validate().unwrap_err()), "database.url");

        assert!(postgres_config().validate().is_ok());
        let alt_scheme = DatabaseConfig {
            url: "postgresql://localhost/users".to_string(),
            ..Default::default()
        };
        assert!(alt_scheme.validate().is_ok());
    }

    #[test]
    fn test_memory_backend_needs_no_url() {
        let config = DatabaseConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pool_bounds() {
        let zero_max = DatabaseConfig {
            max_connections: 0,
            min_connections: 0,
            ..postgres_config()
        };
        assert_eq!(
            field_of(zero_max.validate().unwrap_err()),
            "database.max_connections"
        );

        let min_exceeds = DatabaseConfig {
            max_connections: 2,
            min_connections: 5,
            ..postgres_config()
        };
        assert_eq!(
            field_of(min_exceeds.validate().unwrap_err()),
            "database.min_connections"
        );
    }

    #[test]
    fn test_bcrypt_cost_range() {
        for cost in [4, 10, 31] {
            assert!(SecurityConfig { bcrypt_cost: cost }.validate().is_ok());
        }
        for cost in [0, 3, 32] {
            let err = SecurityConfig { bcrypt_cost: cost }.validate().unwrap_err();
            assert_eq!(field_of(err), "security.bcrypt_cost");
        }
    }

    #[test]
    fn test_logger_settings_validation() {
        assert!(LoggerSettings::default().validate().is_ok());

        let mut bad_level = LoggerSettings::default();
        bad_level.level = "verbose".to_string();
        assert_eq!(field_of(bad_level.validate().unwrap_err()), "logger.level");

        let mut empty_path = LoggerSettings::default();
        empty_path.file.enabled = true;
        empty_path.file.path = "  ".to_string();
        assert_eq!(
            field_of(empty_path.validate().unwrap_err()),
            "logger.file.path"
        );

        let mut disabled_empty_path = LoggerSettings::default();
        disabled_empty_path.file.path = String::new();
        assert!(disabled_empty_path.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        assert!(valid_settings().validate().is_ok());

        let mut settings = valid_settings();
        settings.security.bcrypt_cost = 2;
        assert!(settings.validate().is_err());

        // An empty JWT secret does not fail general validation.
        let settings = valid_settings();
        assert!(settings.jwt.secret.is_empty());
        assert!(settings.validate().is_ok());
    }
}
