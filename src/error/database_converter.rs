use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn diesel::result::DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let message = info.message();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                let (entity, field) = info
                    .constraint_name()
                    .and_then(Self::parse_constraint_name)
                    .or_else(|| {
                        info.table_name()
                            .zip(info.column_name())
                            .map(|(t, c)| (t.to_string(), c.to_string()))
                    })
                    .unwrap_or_else(|| ("resource".to_string(), "unknown".to_string()));
                let value = info
                    .details()
                    .and_then(Self::extract_value_from_details)
                    .unwrap_or_else(|| "unknown".to_string());

                AppError::Duplicate {
                    entity,
                    field,
                    value,
                }
            }
            DatabaseErrorKind::NotNullViolation => AppError::Validation {
                field: info.column_name().unwrap_or("unknown").to_string(),
                reason: "Field is required".to_string(),
            },
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }

    /// Splits a PostgreSQL constraint name of the form `{table}_{column}_key`.
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let stem = constraint_name
            .strip_suffix("_key")
            .or_else(|| constraint_name.strip_suffix("_unique"))?;
        let (table, column) = stem.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    /// Pulls the offending value out of `Key (username)=(alice) already exists.`
    pub fn extract_value_from_details(details: &str) -> Option<String> {
        let (_, rest) = details.split_once(")=(")?;
        let (value, _) = rest.split_once(')')?;
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constraint_name() {
        assert_eq!(
            DatabaseErrorConverter::parse_constraint_name("users_username_key"),
            Some(("users".to_string(), "username".to_string()))
        );
        assert_eq!(DatabaseErrorConverter::parse_constraint_name("users_pkey"), None);
    }

    #[test]
    fn test_extract_value_from_details() {
        assert_eq!(
            DatabaseErrorConverter::extract_value_from_details(
                "Key (username)=(alice) already exists."
            ),
            Some("alice".to_string())
        );
        assert_eq!(DatabaseErrorConverter::extract_value_from_details("nothing"), None);
    }

    #[test]
    fn test_not_found_conversion() {
        let error = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find");
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_other_errors_become_database_errors() {
        let error = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "delete all users",
        );
        match error {
            AppError::Database { operation, .. } => assert_eq!(operation, "delete all users"),
            other => panic!("Expected Database error, got {:?}", other),
        }
    }
}
