//! HTTP handlers for the native host.
//!
//! The host only serves the compiled web client. Every path that is not a
//! real file gets `index.html`, so reloading `/dashboard/abc` boots the
//! client and lets its router pick the screen.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::path::Path;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /status - Service health check
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "video-scoring",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the host router serving `dist_dir`.
pub fn router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let assets = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/status", get(status_handler))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
