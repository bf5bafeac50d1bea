//! CSV dataset loader
//!
//! Streams the source CSV one row at a time and produces the full
//! in-memory record sequence, preserving source order. Any parse
//! failure aborts the load immediately; there is no row skipping and
//! no partial dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::Zip;

/// Positional source schema: the loader never resolves columns by
/// header name.
const CODE_FIELD: usize = 0;
const CITY_FIELD: usize = 3;
const STATE_FIELD: usize = 6;

/// Minimum number of fields a data row must carry.
const MIN_FIELDS: usize = STATE_FIELD + 1;

/// Default preallocation for the output vector. Sized for the full US
/// zip dataset; purely an allocation optimization.
const DEFAULT_EXPECTED_RECORDS: usize = 43_000;

/// CSV loader for the zip dataset.
pub struct ZipLoader {
    /// Expected record count, used to preallocate the output vector
    expected_records: usize,
}

impl Default for ZipLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipLoader {
    pub fn new() -> Self {
        Self {
            expected_records: DEFAULT_EXPECTED_RECORDS,
        }
    }

    /// Set the expected record count used for preallocation
    pub fn with_expected_records(mut self, expected: usize) -> Self {
        self.expected_records = expected;
        self
    }

    /// Load the dataset from a CSV file on disk
    pub fn load(&self, path: impl AsRef<Path>) -> DatasetResult<Vec<Zip>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_reader(file)
    }

    /// Load the dataset from any reader (useful for testing)
    pub fn load_from_reader<R: Read>(&self, input: R) -> DatasetResult<Vec<Zip>> {
        // Strict mode: every row must carry the same field count as the
        // header row, so ragged rows fail the load instead of being
        // silently padded or truncated.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(input);

        let mut row = csv::StringRecord::new();

        // Read and discard the header row. Column names are not
        // validated; the schema is positional.
        match reader.read_record(&mut row) {
            Ok(true) => {}
            Ok(false) => {
                return Err(DatasetError::Header(
                    "empty input, expected a header row".to_string(),
                ))
            }
            Err(e) => return Err(DatasetError::Header(e.to_string())),
        }

        let mut zips = Vec::with_capacity(self.expected_records);
        let mut line: u64 = 1;

        loop {
            line += 1;
            match reader.read_record(&mut row) {
                // End of input after zero or more valid rows is success
                Ok(false) => return Ok(zips),
                Ok(true) => zips.push(parse_row(&row, line)?),
                Err(e) => {
                    return Err(DatasetError::Record {
                        line,
                        reason: e.to_string(),
                    })
                }
            }
        }
    }
}

/// Extract one record from a parsed row.
///
/// A row with fewer than seven fields is a parse error, not a record
/// with empty fields. Short rows abort the load; this covers datasets
/// whose header itself has fewer than seven columns, which the strict
/// field-count check alone would let through.
fn parse_row(row: &csv::StringRecord, line: u64) -> DatasetResult<Zip> {
    if row.len() < MIN_FIELDS {
        return Err(DatasetError::Record {
            line,
            reason: format!("expected at least {} fields, got {}", MIN_FIELDS, row.len()),
        });
    }

    Ok(Zip::new(
        &row[CODE_FIELD],
        &row[CITY_FIELD],
        &row[STATE_FIELD],
    ))
}

/// Load the zip dataset from a CSV file with default settings.
pub fn load_zips(path: impl AsRef<Path>) -> DatasetResult<Vec<Zip>> {
    ZipLoader::new().load(path)
}
