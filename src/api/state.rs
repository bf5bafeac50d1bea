//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks. The city
//! index is immutable after startup, so concurrent readers need no
//! synchronization.

use crate::config::ServerConfig;
use crate::index::CityIndex;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// City index built once at startup, read-only afterward
    pub index: Arc<CityIndex>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(index: Arc<CityIndex>, config: ServerConfig) -> Self {
        Self {
            index,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
