//! Record store error types

use thiserror::Error;

/// Record store operation errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// Record not found by ID
    #[error("Record {0} not found")]
    NotFound(i32),

    /// Submitted field failed validation
    #[error("Invalid record: {0}")]
    Validation(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl RecordError {
    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(self, RecordError::NotFound(_) | RecordError::Validation(_))
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordError::NotFound(_))
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound(_) => "NOT_FOUND",
            RecordError::Validation(_) => "VALIDATION_FAILED",
            RecordError::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = RecordError::NotFound(7);
        assert_eq!(err.to_string(), "Record 7 not found");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_validation_error() {
        let err = RecordError::Validation("age must be an integer".to_string());
        assert_eq!(err.to_string(), "Invalid record: age must be an integer");
        assert!(!err.is_not_found());
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn test_database_error_is_server_side() {
        let err = RecordError::Database(sea_orm::DbErr::Custom("locked".to_string()));
        assert!(!err.is_client_error());
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
