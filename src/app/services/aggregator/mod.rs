//! Aggregation of valid sales records
//!
//! This module folds the sequence of valid records into per-run totals and
//! derives the ordered top-N ranking:
//! - [`totals`] - the running accumulator (revenue sum, order count,
//!   per-product revenue map)
//! - [`ranker`] - deterministic top-N ordering over the product map
//!
//! The fold is associative and commutative over record order, so the
//! aggregates are identical for any permutation of the same input.

pub mod ranker;
pub mod totals;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use ranker::rank_products;
pub use totals::RunningTotals;
