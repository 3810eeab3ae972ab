//! Sales Analyzer Library
//!
//! A Rust library for single-pass revenue analysis of tabular sales data.
//! It reads a CSV file of sales records and computes three aggregate
//! metrics: total revenue, average order value, and the top-N products
//! ranked by accumulated revenue.
//!
//! This library provides tools for:
//! - Decoding sales CSV files under two column-naming profiles
//! - Coercing raw numeric text to exact decimals under a strict or lenient policy
//! - Validating records against the inclusion rules (identity, quantity, price)
//! - Folding valid records into running totals and a per-product revenue map
//! - Producing a deterministic top-N ranking with a pinned tie-break
//! - Comprehensive error handling with per-row warnings and run-fatal errors

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod analyzer;
        pub mod csv_reader;
        pub mod record_validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{CoercionPolicy, InputProfile, RankedProduct, SalesRecord};
pub use config::AnalysisConfig;

/// Result type alias for the sales analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Run-fatal error types for sales analysis operations
///
/// Row-level validation failures are not represented here: they are
/// [`app::models::Rejection`] values that never propagate past the
/// validator loop.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error (structurally malformed input)
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input file not found
    #[error("Sales file not found: {path}")]
    FileNotFound { path: String },

    /// Input file is missing required columns for the active profile
    #[error("Input file '{file}' is missing required columns: {}", columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a missing-columns error naming every absent column
    pub fn missing_columns(file: impl Into<String>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            file: file.into(),
            columns,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV decoding failed".to_string(),
            source: Some(error),
        }
    }
}
