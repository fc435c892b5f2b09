use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use tracing::debug;

use crate::errors::ImportError;
use crate::server::app::AppState;
use crate::server::error::AppError;

pub const UPLOAD_FIELD: &str = "file";

pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, &'static str), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
        debug!("Received upload {:?} ({} bytes)", file_name, bytes.len());

        state.imports.import_upload(&bytes).await?;
        return Ok((StatusCode::OK, "CSV uploaded and processed"));
    }

    Err(ImportError::EmptyUpload.into())
}
