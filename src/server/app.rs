use anyhow::{anyhow, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::handlers::{charts, health, records, uploads};
use crate::config::AppConfig;
use crate::services::{ChartService, ImportService, RecordService};

/// Everything a handler needs, built once at start-up.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub records: RecordService,
    pub imports: ImportService,
    pub charts: ChartService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            records: RecordService::new(db.clone()),
            imports: ImportService::new(db.clone(), config.upload_path.clone()),
            charts: ChartService::new(config.dataset_path.clone(), config.static_dir.clone()),
            config: Arc::new(config),
            db,
        }
    }
}

pub async fn create_app(db: DatabaseConnection, config: AppConfig) -> Result<Router> {
    let cors = match config.cors_origin.as_deref() {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers(Any),
    };

    let static_dir = config.static_dir.clone();
    let state = AppState::new(db, config);

    let app = Router::new()
        .route("/health", get(health::health_check))
        // Record store
        .route("/", get(records::home))
        .route("/add", post(records::add_record))
        .route(
            "/update/:id",
            get(records::edit_record).post(records::update_record),
        )
        .route("/delete/:id", get(records::delete_record))
        .route("/database", get(records::database_view))
        // CSV import
        // uploads are not size-limited
        .route(
            "/upload-csv",
            post(uploads::upload_csv).layer(DefaultBodyLimit::disable()),
        )
        // Chart pipeline
        .route("/data-visualization", get(charts::data_visualization))
        .route("/page1", get(charts::genre_bar_chart))
        .route("/page2", get(charts::scatter_year_revenue))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
