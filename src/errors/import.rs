//! CSV import error types

use thiserror::Error;

/// CSV upload and import errors
#[derive(Error, Debug)]
pub enum ImportError {
    /// A row could not be turned into a record
    #[error("Parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number in the uploaded file
        line: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// The upload request carried no file
    #[error("No file was uploaded")]
    EmptyUpload,

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ImportError {
    pub(crate) fn parse(line: u64, reason: impl Into<String>) -> Self {
        ImportError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ImportError::Parse { .. } | ImportError::EmptyUpload | ImportError::Csv(_)
        )
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ImportError::Parse { .. } => "PARSE_ERROR",
            ImportError::EmptyUpload => "VALIDATION_FAILED",
            ImportError::Io(_) => "IO_ERROR",
            ImportError::Csv(_) => "CSV_ERROR",
            ImportError::Database(_) => "DATABASE_ERROR",
        }
    }
}
