//! Core domain models for sales analysis
//!
//! This module defines the data types that flow through the analysis
//! pipeline: raw records produced by the CSV reader, validated sales
//! records, rejection reasons for rows that fail validation, and the
//! ranked products handed to the report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{compact_columns, standard_columns};

/// Column-naming profile of the input file
///
/// Two field-naming conventions exist in practice. The active profile
/// determines which column headers the reader resolves and which report
/// layout is rendered; validation and aggregation are profile-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputProfile {
    /// Columns `product_name`, `quantity`, `unit_price`; the header is
    /// checked for all three columns before any row is processed
    Standard,
    /// Columns `product`, `quantity`, `price`; no up-front header check
    Compact,
}

impl InputProfile {
    /// Column header carrying the product identity
    pub fn product_column(&self) -> &'static str {
        match self {
            Self::Standard => standard_columns::PRODUCT,
            Self::Compact => compact_columns::PRODUCT,
        }
    }

    /// Column header carrying the order quantity
    pub fn quantity_column(&self) -> &'static str {
        match self {
            Self::Standard => standard_columns::QUANTITY,
            Self::Compact => compact_columns::QUANTITY,
        }
    }

    /// Column header carrying the unit price
    pub fn price_column(&self) -> &'static str {
        match self {
            Self::Standard => standard_columns::UNIT_PRICE,
            Self::Compact => compact_columns::UNIT_PRICE,
        }
    }

    /// Columns the header must contain before any row is read, if the
    /// profile mandates an up-front check
    pub fn required_columns(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Standard => Some(standard_columns::REQUIRED),
            Self::Compact => None,
        }
    }
}

impl fmt::Display for InputProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

/// Policy applied when raw numeric text fails to parse
///
/// A single configurable policy on the validator rather than two separate
/// code paths; one behavior is chosen per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoercionPolicy {
    /// Parse failures reject the row with a descriptive reason naming the
    /// field and the offending text (default)
    #[default]
    Strict,
    /// Parse failures silently coerce to zero; the zero value then
    /// typically trips the quantity or price rule. Trades visibility for
    /// robustness and must be chosen explicitly.
    Lenient,
}

impl fmt::Display for CoercionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// One data row as produced by the CSV reader, before validation
///
/// The three fields are raw strings resolved once at the input boundary;
/// a field whose column is absent from the file (or short on this row) is
/// `None`. Raw records are consumed exactly once by the validator and
/// never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based data row number (header excluded), used in warnings
    pub row: u64,
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
}

/// A validated sales record that contributes to the aggregates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    /// Product identity, trimmed and non-empty
    pub product: String,
    /// Order quantity, strictly positive
    pub quantity: Decimal,
    /// Unit price, strictly positive
    pub unit_price: Decimal,
    /// Derived revenue: `quantity * unit_price`
    pub revenue: Decimal,
}

impl SalesRecord {
    /// Create a sales record, deriving its revenue
    pub fn new(product: String, quantity: Decimal, unit_price: Decimal) -> Self {
        let revenue = quantity * unit_price;
        Self {
            product,
            quantity,
            unit_price,
            revenue,
        }
    }
}

/// Rule that disqualified a row from aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Product identity empty after trimming
    MissingIdentity,
    /// Numeric text failed to parse under the strict policy
    InvalidField {
        field: &'static str,
        value: String,
    },
    /// Quantity was zero or negative
    NonPositiveQuantity { value: Decimal },
    /// Unit price was zero or negative
    NonPositivePrice { value: Decimal },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentity => write!(f, "missing product name"),
            Self::InvalidField { field, value } => {
                write!(f, "invalid {} value '{}': must be a number", field, value)
            }
            Self::NonPositiveQuantity { value } => {
                write!(f, "non-positive quantity {}", value)
            }
            Self::NonPositivePrice { value } => {
                write!(f, "non-positive unit price {}", value)
            }
        }
    }
}

/// A rejected row: which row, and which rule fired
///
/// Rejections are per-row and non-fatal; they are surfaced to the caller
/// for logging and recorded in the run statistics, but never halt
/// processing of subsequent rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based data row number
    pub row: u64,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

/// One entry of the top-N ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedProduct {
    pub product: String,
    /// Revenue accumulated across every valid record for this product
    pub revenue: Decimal,
}
