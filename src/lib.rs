//! # Zipserve
//!
//! A minimal HTTP service answering "which zip codes belong to this
//! city?". A static CSV dataset is loaded into memory once at startup;
//! lookups are pure in-memory map reads served over HTTP.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV dataset loader
//! - [`index`]: case-insensitive city index
//! - [`api`]: HTTP API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
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
//!     // Load the dataset; any failure here is fatal
//!     let zips = load_zips("zips.csv")?;
//!
//!     // Group records by lower-cased city name
//!     let index = Arc::new(CityIndex::build(zips));
//!
//!     // Serve lookups at /zips/<cityName>
//!     let config = ServerConfig::default();
//!     let state = AppState::new(index, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod index;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};
pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
pub use dataset::{load_zips, DatasetError, DatasetResult, Zip, ZipLoader};
pub use index::{CityIndex, IndexStats};
