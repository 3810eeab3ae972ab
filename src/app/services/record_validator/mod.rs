//! Record validation for sales rows
//!
//! This module decides which raw rows qualify for aggregation. It is
//! organized into two components:
//! - [`coercion`] - raw numeric text to exact decimal under the active policy
//! - [`validator`] - the rule chain producing a valid record or a rejection
//!
//! Every rejection carries the data row number and the rule that fired, so
//! the caller can log it; rejections are per-row and never halt the run.

pub mod coercion;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use coercion::coerce_numeric;
pub use validator::RecordValidator;
