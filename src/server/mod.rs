pub mod app;
pub mod error;
pub mod handlers;
pub mod pages;

use crate::config::AppConfig;
use crate::database::connection::*;
use anyhow::Result;
use tracing::info;

pub async fn start_server(config: AppConfig) -> Result<()> {
    let database_url = get_database_url(Some(&config.database));
    let db = establish_connection(&database_url).await?;

    setup_database(&db).await?;

    let port = config.port;
    let app = app::create_app(db, config).await?;

    log_routes(port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes(port: u16) {
    info!("Endpoints on port {}:", port);
    info!("  /                           - Record list and add form");
    info!("  /add, /update/:id, /delete/:id - Record editing");
    info!("  /database                   - Record listing");
    info!("  /upload-csv                 - CSV import (multipart field 'file')");
    info!("  /data-visualization         - Revenue histogram");
    info!("  /page1                      - Genre bar chart");
    info!("  /page2                      - Year vs revenue scatter plot");
    info!("  /static/*                   - Generated chart images");
    info!("  /health                     - Health check");
}
