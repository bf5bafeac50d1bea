//! City Lookup Routes
//!
//! The core endpoint: answers which zip codes belong to a city.
//!
//! - GET <prefix><cityName> - JSON array of matching records
//!
//! The handler is a pure function of (path, shared index); no
//! per-request state persists across calls.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET <prefix>*city
///
/// Normalizes the captured city name to lower case and answers with
/// the matching records. Lookup is total: an unknown city yields a 200
/// with an empty JSON array, never a 404.
pub async fn lookup_city(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> ApiResult<Response> {
    let city = city.to_lowercase();
    if city.is_empty() {
        return Err(ApiError::EmptyCity);
    }

    let zips = state.index.get(&city);
    tracing::debug!(city = %city, matches = zips.len(), "city lookup");

    // Unrestricted cross-origin read access on success responses
    Ok((
        [(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        )],
        Json(zips),
    )
        .into_response())
}

/// GET <prefix>
///
/// The bare prefix carries no city name; respond with the client
/// error instead of attempting a lookup.
pub async fn missing_city() -> ApiResult<Response> {
    Err(ApiError::EmptyCity)
}
