//! API Error Types
//!
//! Defines error types for the API layer and implements conversion to
//! HTTP responses. Request-time errors are contained within a single
//! request; they never affect other requests or the shared index.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request path carried no city name after the prefix.
    /// A normal per-request condition, answered with a 400.
    #[error("please provide a city name")]
    EmptyCity,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::EmptyCity => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "API error occurred");
        }

        // Plain-text error bodies; the client error carries the literal
        // message "please provide a city name".
        (status, self.to_string()).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
