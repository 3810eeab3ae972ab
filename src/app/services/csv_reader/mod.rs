//! CSV reader for sales record files
//!
//! This module is the file-reading/CSV-decoding boundary of the pipeline.
//! It opens the input file, resolves the active profile's columns against
//! the header exactly once, and materializes every data row as a
//! [`RawRecord`](crate::app::models::RawRecord) holding raw string fields.
//! All interpretation of those strings (trimming, numeric coercion,
//! validation rules) happens downstream in the record validator.
//!
//! Structural problems are run-fatal here: a missing file, a malformed CSV
//! stream, or (for the standard profile) a header that lacks any of the
//! required columns abort the run before partial data can be reported.

pub mod columns;
pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::ColumnMap;
pub use reader::read_sales_file;
