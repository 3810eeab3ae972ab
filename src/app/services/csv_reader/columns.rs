//! Header column resolution for sales CSV files
//!
//! The column positions for the active profile are resolved once, at the
//! input boundary, so the rest of the pipeline works with fixed fields
//! instead of re-validating string keys on every row.

use csv::StringRecord;

use crate::app::models::InputProfile;

/// Resolved column positions for the three sales fields
///
/// A `None` index means the column is absent from the file; the
/// corresponding raw field will be `None` on every row and the validator
/// decides what that means under the active policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    product: Option<usize>,
    quantity: Option<usize>,
    unit_price: Option<usize>,
}

impl ColumnMap {
    /// Resolve the profile's column names against the file header
    ///
    /// Header cells are trimmed before matching so that padded headers
    /// like `product_name, quantity, unit_price` resolve correctly.
    pub fn resolve(headers: &StringRecord, profile: InputProfile) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
        };

        Self {
            product: find(profile.product_column()),
            quantity: find(profile.quantity_column()),
            unit_price: find(profile.price_column()),
        }
    }

    /// Columns from the profile's required set that the header lacks
    ///
    /// Empty for the compact profile, which has no up-front header check.
    pub fn missing_required(&self, profile: InputProfile) -> Vec<String> {
        let Some(required) = profile.required_columns() else {
            return Vec::new();
        };

        let resolved = [
            (profile.product_column(), self.product),
            (profile.quantity_column(), self.quantity),
            (profile.price_column(), self.unit_price),
        ];

        required
            .iter()
            .filter(|name| {
                resolved
                    .iter()
                    .any(|(column, index)| column == *name && index.is_none())
            })
            .map(|name| name.to_string())
            .collect()
    }

    /// Extract the raw product field from a data row
    pub fn product(&self, record: &StringRecord) -> Option<String> {
        field_at(record, self.product)
    }

    /// Extract the raw quantity field from a data row
    pub fn quantity(&self, record: &StringRecord) -> Option<String> {
        field_at(record, self.quantity)
    }

    /// Extract the raw unit price field from a data row
    pub fn unit_price(&self, record: &StringRecord) -> Option<String> {
        field_at(record, self.unit_price)
    }
}

fn field_at(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .map(|value| value.to_string())
}
