use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of movies currently loaded.
    pub movies: usize,
    /// Number of categories currently loaded.
    pub categories: usize,
}

/// GET /health -- returns service status and collection sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let categories = state.db.categories.len().await;
    let movies = state.db.movies.len().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        movies,
        categories,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
