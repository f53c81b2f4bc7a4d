//! HTTP server for the FinMetrics API.
//!
//! # API Endpoints
//!
//! | Method  | Path        | Description                               |
//! |---------|-------------|-------------------------------------------|
//! | GET     | `/api/data` | Normalized financial records as JSON      |
//! | OPTIONS | `/api/data` | CORS pre-flight (200, permissive headers) |
//! | GET     | `/health`   | Health check                              |
//!
//! Every `/api/data` request reads the workbook fresh from disk; a
//! loader or normalizer failure becomes a single 500 response with a
//! generic body, with the cause logged server-side.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::types::{error_response, ServerConfig};
use crate::error::ServerResult;
use crate::models::FinancialRecord;
use crate::pipeline::load_records;

/// Build the application router.
pub fn router(config: ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let static_dir = config.static_dir.clone();

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/data", get(get_data))
        .with_state(config);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors)
}

/// Start the HTTP server and block until it exits.
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let port = config.port;
    let workbook = config.workbook_path.display().to_string();

    let app = router(config);

    tracing::info!(%addr, workbook, "finmetrics server listening");
    tracing::info!("GET  http://localhost:{port}/api/data");
    tracing::info!("GET  http://localhost:{port}/health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "finmetrics",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Serve the normalized record set.
///
/// Re-reads the workbook on every request (no cache). The blocking file
/// read runs on the blocking pool so the runtime is not starved.
async fn get_data(
    State(config): State<ServerConfig>,
) -> Result<Json<Vec<FinancialRecord>>, (StatusCode, Json<Value>)> {
    let path = config.workbook_path.clone();
    let options = config.options.clone();

    let records = tokio::task::spawn_blocking(move || load_records(&path, &options))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "data task panicked");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response()))
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "failed to process data file");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response()))
        })?;

    Ok(Json(records))
}
