//! API Data Transfer Objects
//!
//! Request and response bodies for the non-core endpoints. City lookup
//! responses serialize the dataset records directly.

use serde::{Deserialize, Serialize};

/// GET /hello query parameters
#[derive(Debug, Deserialize)]
pub struct HelloParams {
    #[serde(default)]
    pub name: String,
}

/// GET /health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Total records loaded from the dataset
    pub records: usize,
    /// Number of distinct city names indexed
    pub cities: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
