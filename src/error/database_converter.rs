use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::AppError;

/// Utility for converting database errors to structured AppError variants.
///
/// The schema carries a single foreign key, `locations.organisation_id`;
/// a violation of it means the referenced organisation disappeared between
/// the existence check and the insert, so it surfaces as the same not-found
/// error the check raises.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                if info
                    .constraint_name()
                    .is_some_and(|name| name.contains("organisation"))
                {
                    AppError::NotFound {
                        entity: "organisation".to_string(),
                        field: "id".to_string(),
                        value: "unknown".to_string(),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Foreign key constraint violation: {}",
                            info.message()
                        )),
                    }
                }
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_conversion() {
        let error = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "select");
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_rollback_error_converts_to_database() {
        let error = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "insert location",
        );
        match error {
            AppError::Database { operation, .. } => assert_eq!(operation, "insert location"),
            other => panic!("Expected database error, got {:?}", other),
        }
    }
}
