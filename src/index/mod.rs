//! City Index
//!
//! In-memory index over the loaded dataset:
//!
//! - **CityIndex**: HashMap from lower-cased city name to the records
//!   for that city, in dataset order.
//!
//! Built once at startup, read-only afterward. Handlers share it
//! through an `Arc` with no locking; there is no writer after
//! construction.

mod city_index;

pub use city_index::CityIndex;

use serde::{Deserialize, Serialize};

/// Statistics about the built index
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total records indexed
    pub records: usize,
    /// Number of distinct (normalized) city names
    pub cities: usize,
}
