//! Dataset loading error types
//!
//! All loading errors are fatal to process startup: the server never
//! serves with a missing or partial dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the zip dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The CSV resource could not be opened
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be read
    #[error("failed to read header row: {0}")]
    Header(String),

    /// A data row could not be parsed (malformed CSV, too few fields)
    #[error("failed to parse record at line {line}: {reason}")]
    Record { line: u64, reason: String },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
