use sea_orm::error::DbErr;
use serde::Serialize;

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[from]
        #[serde(skip)]
        sea_orm::error::DbErr,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Bootstrap error: {0}")]
    BootstrapError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Other error: {0}")]
    Other(
        #[from]
        #[serde(skip)]
        anyhow::Error,
    ),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    /// Wraps a sea-orm error; usable directly in `map_err`.
    pub fn db_error(error: DbErr) -> Self {
        ServiceError::DatabaseError(error)
    }

    /// Shorthand for the `NotFound` variant with an entity label and key.
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{} {} not found", entity, key))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The message shown to the operator.
    /// Internal failures collapse to a generic text so storage details do not leak.
    pub fn user_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::InternalError(_) | Self::MigrationError(_) | Self::Other(_) => {
                "Internal error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Unwraps a sea-orm transaction result into the service error space.
pub fn from_transaction_error(err: sea_orm::TransactionError<ServiceError>) -> ServiceError {
    match err {
        sea_orm::TransactionError::Connection(e) => ServiceError::db_error(e),
        sea_orm::TransactionError::Transaction(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_hide_details_from_users() {
        let err = ServiceError::db_error(DbErr::Custom(
            "UNIQUE constraint failed: cariler.cari_kod".into(),
        ));
        assert_eq!(err.user_message(), "Database error");
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn user_facing_errors_keep_their_message() {
        let err = ServiceError::Conflict("fatura_no FAT-1 already exists".into());
        assert_eq!(err.user_message(), "Conflict: fatura_no FAT-1 already exists");
    }

    #[test]
    fn not_found_helper_formats_entity_and_key() {
        let err = ServiceError::not_found("Cari", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Cari 42 not found");
    }

    #[test]
    fn transaction_errors_unwrap_inner_service_error() {
        let inner = sea_orm::TransactionError::Transaction(ServiceError::InvalidOperation(
            "closed".into(),
        ));
        assert!(matches!(
            from_transaction_error(inner),
            ServiceError::InvalidOperation(_)
        ));

        let conn = sea_orm::TransactionError::<ServiceError>::Connection(DbErr::Custom(
            "gone".into(),
        ));
        assert!(matches!(
            from_transaction_error(conn),
            ServiceError::DatabaseError(_)
        ));
    }

    #[test]
    fn validation_errors_convert() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("unvan", validator::ValidationError::new("length"));
        let err: ServiceError = errors.into();
        assert!(matches!(err, ServiceError::ValidationError(_)));
    }
}
