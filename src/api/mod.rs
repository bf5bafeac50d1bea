//! Zipserve HTTP API
//!
//! HTTP layer for the zip-code lookup service, built with Axum.
//!
//! # Endpoints
//!
//! ## City lookup (core)
//! - `GET <prefix><cityName>` - JSON array of `{code, city, state}`
//!   records for the city (case-insensitive; possibly empty), with
//!   `Access-Control-Allow-Origin: *`
//! - `GET <prefix>` - 400 `please provide a city name`
//!
//! ## Plumbing
//! - `GET /hello?name=X` - plain-text greeting
//! - `GET /health` - runtime diagnostics (record/city counts, uptime)
//!
//! The default prefix is `/zips/`; it is configuration, not contract.
//!
//! # Example
//!
//! ```rust,no_run
//! use zipserve::api::{serve, AppState};
//! use zipserve::config::ServerConfig;
//! use zipserve::dataset::load_zips;
//! use zipserve::index::CityIndex;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let zips = load_zips("zips.csv")?;
//!     let index = Arc::new(CityIndex::build(zips));
//!
//!     let config = ServerConfig::default();
//!     let state = AppState::new(index, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use axum_server::tls_rustls::RustlsConfig;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware.
///
/// The city-lookup route is mounted under the configured path prefix;
/// the bare prefix (with and without trailing slash) answers the
/// empty-name client error.
pub fn build_router(state: AppState) -> Router {
    let prefix = normalize_prefix(&state.config.path_prefix);

    let mut router = Router::new()
        .route("/hello", get(routes::hello::hello))
        .route("/health", get(routes::health::health))
        .route(&format!("{prefix}*city"), get(routes::zips::lookup_city))
        .route(&prefix, get(routes::zips::missing_city));

    if prefix != "/" {
        router = router.route(prefix.trim_end_matches('/'), get(routes::zips::missing_city));
    }

    let shared_state = Arc::new(state);

    router
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Normalize a configured path prefix to `/name/` form.
fn normalize_prefix(prefix: &str) -> String {
    let mut normalized = String::with_capacity(prefix.len() + 2);
    if !prefix.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(prefix);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Start the API server.
///
/// Serves HTTPS when both certificate and key paths are configured,
/// plain HTTP otherwise. Runs until a shutdown signal is received.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);
    let addr = config.addr();

    if config.tls_partially_configured() {
        tracing::warn!("only one of tls_cert/tls_key is set; serving plain HTTP");
    }

    match config.tls_paths() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key).await?;
            let socket_addr = addr
                .parse()
                .map_err(|e| ApiError::Internal(format!("invalid listen address {addr}: {e}")))?;

            tracing::info!("zipserve listening on https://{}", addr);

            let handle = axum_server::Handle::new();
            tokio::spawn({
                let handle = handle.clone();
                async move {
                    shutdown_signal().await;
                    handle.graceful_shutdown(Some(Duration::from_secs(5)));
                }
            });

            axum_server::bind_rustls(socket_addr, tls)
                .handle(handle)
                .serve(router.into_make_service())
                .await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!("zipserve listening on http://{}", addr);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;
        }
    }

    tracing::info!("zipserve shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
