//! Zip Dataset
//!
//! Loads the static zip-code dataset from a CSV file into memory.
//! The dataset is read exactly once at process startup; records are
//! immutable after loading.
//!
//! The source schema is positional: column 0 is the zip code, column 3
//! the city name, column 6 the state. The header row is discarded
//! without validating column names.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_zips, ZipLoader};
pub use types::Zip;
