//! Application constants for the sales analyzer
//!
//! This module contains the column-name constants for the supported input
//! profiles and the documented defaults used when no explicit configuration
//! is supplied.

// =============================================================================
// Input Defaults
// =============================================================================

/// Default sales data file read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "sales.csv";

/// Default number of top products reported
pub const DEFAULT_TOP_N: usize = 5;

// =============================================================================
// Column Names
// =============================================================================

/// Column names for the standard profile (`product_name,quantity,unit_price`)
pub mod standard_columns {
    pub const PRODUCT: &str = "product_name";
    pub const QUANTITY: &str = "quantity";
    pub const UNIT_PRICE: &str = "unit_price";

    /// Columns that must all be present in the header before any row is read
    pub const REQUIRED: &[&str] = &[PRODUCT, QUANTITY, UNIT_PRICE];
}

/// Column names for the compact profile (`product,quantity,price`)
pub mod compact_columns {
    pub const PRODUCT: &str = "product";
    pub const QUANTITY: &str = "quantity";
    pub const UNIT_PRICE: &str = "price";
}

// =============================================================================
// Field Names (for coercion diagnostics)
// =============================================================================

/// Logical field names used in rejection reasons, independent of the
/// profile-specific column headers.
pub mod fields {
    pub const QUANTITY: &str = "quantity";
    pub const UNIT_PRICE: &str = "unit_price";
}
