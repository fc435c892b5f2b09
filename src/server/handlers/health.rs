use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::server::app::AppState;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "recordchart",
        "version": env!("CARGO_PKG_VERSION"),
        "dataset_available": state.config.dataset_path.is_file(),
    })))
}
