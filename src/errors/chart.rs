//! Chart pipeline error types

use thiserror::Error;

/// Dataset loading and chart rendering errors
#[derive(Error, Debug)]
pub enum ChartError {
    /// Dataset file is absent
    #[error("Error: file '{0}' was not found.")]
    FileNotFound(String),

    /// Dataset lacks a column the view needs
    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    /// CSV reader error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl ChartError {
    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChartError::FileNotFound(_) | ChartError::MissingColumn(_)
        )
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChartError::FileNotFound(_))
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ChartError::FileNotFound(_) => "NOT_FOUND",
            ChartError::MissingColumn(_) => "VALIDATION_FAILED",
            ChartError::Csv(_) => "CSV_ERROR",
            ChartError::Io(_) => "IO_ERROR",
            ChartError::Render(_) => "RENDER_ERROR",
        }
    }
}
