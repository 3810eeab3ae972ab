//! Sales file reading and row materialization

use std::path::Path;
use tracing::{debug, info};

use super::columns::ColumnMap;
use crate::app::models::{InputProfile, RawRecord};
use crate::{Error, Result};

/// Read a sales CSV file into an ordered sequence of raw records
///
/// Resolves the profile's columns against the header, applies the
/// required-columns check where the profile mandates one, and returns one
/// [`RawRecord`] per data row in file order. Rows are returned unfiltered;
/// disqualifying rows is the validator's job.
///
/// # Errors
///
/// Returns a run-fatal error when the file does not exist, cannot be read,
/// is structurally malformed CSV, or lacks a required column.
pub fn read_sales_file(path: &Path, profile: InputProfile) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    info!("Reading sales data from {}", path.display());

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to open CSV reader".to_string(),
                Some(e),
            )
        })?;

    let headers = csv_reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to read CSV header".to_string(),
                Some(e),
            )
        })?
        .clone();

    let column_map = ColumnMap::resolve(&headers, profile);
    debug!("Resolved {} profile columns: {:?}", profile, column_map);

    // Required-columns check runs before any row is processed
    let missing = column_map.missing_required(profile);
    if !missing.is_empty() {
        return Err(Error::missing_columns(path.display().to_string(), missing));
    }

    let mut rows = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                format!("Malformed record at data row {}", index + 1),
                Some(e),
            )
        })?;

        rows.push(RawRecord {
            row: (index + 1) as u64,
            product: column_map.product(&record),
            quantity: column_map.quantity(&record),
            unit_price: column_map.unit_price(&record),
        });
    }

    info!("Read {} data rows from {}", rows.len(), path.display());

    Ok(rows)
}
