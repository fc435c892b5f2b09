use axum::{extract::State, response::Html};

use crate::charts::ChartKind;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::pages;

async fn render_chart(state: AppState, kind: ChartKind) -> Result<Html<String>, AppError> {
    let charts = state.charts;

    // reading the dataset and writing the image are blocking file operations
    let output = tokio::task::spawn_blocking(move || charts.render(kind))
        .await
        .map_err(|e| AppError::Internal(format!("Chart task failed: {}", e)))??;

    Ok(pages::chart(&output)?)
}

pub async fn data_visualization(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_chart(state, ChartKind::Histogram).await
}

pub async fn genre_bar_chart(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_chart(state, ChartKind::GenreBar).await
}

pub async fn scatter_year_revenue(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    render_chart(state, ChartKind::Scatter).await
}
