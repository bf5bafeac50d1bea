//! Health Route
//!
//! Runtime diagnostics for monitoring.
//!
//! - GET /health - dataset, index and uptime figures

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health
///
/// The index is built before the server accepts traffic, so a serving
/// process is by definition healthy; the payload is diagnostics.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.index.stats();

    Json(HealthResponse {
        status: "ok".to_string(),
        records: stats.records,
        cities: stats.cities,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
