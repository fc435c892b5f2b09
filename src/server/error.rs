use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::errors::{ChartError, ImportError, RecordError};

/// Handler error, rendered as a plain-text response.
#[derive(Debug)]
pub enum AppError {
    Record(RecordError),
    Import(ImportError),
    Chart(ChartError),
    BadRequest(String),
    Internal(String),
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        AppError::Record(err)
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::Import(err)
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::Chart(err)
    }
}

impl From<handlebars::RenderError> for AppError {
    fn from(err: handlebars::RenderError) -> Self {
        AppError::Internal(format!("Template error: {}", err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Record(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Record(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Import(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Chart(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Chart(err) if err.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Record(err) => err.to_string(),
            AppError::Import(err) => err.to_string(),
            AppError::Chart(err) => err.to_string(),
            AppError::BadRequest(msg) | AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            error!("Request failed: {}", message);
            return (status, "Internal server error".to_string()).into_response();
        }

        warn!("Request rejected ({}): {}", status, message);
        (status, message).into_response()
    }
}
