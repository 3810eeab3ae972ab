//! Inclusion rules for sales records

use rust_decimal::Decimal;

use super::coercion::coerce_numeric;
use crate::app::models::{CoercionPolicy, RawRecord, RejectReason, Rejection, SalesRecord};
use crate::constants::fields;

/// Validator deciding whether a raw row contributes to aggregation
///
/// Applies the inclusion rules in a fixed order: product identity, numeric
/// coercion of quantity and unit price, then the positivity rules. The
/// first rule that fails rejects the row.
///
/// A zero unit price is rejected along with negative ones. This is the
/// single rule for both coercion policies, so a price that fails to parse
/// leads to the same aggregates whether it is rejected outright (strict)
/// or coerced to zero first (lenient).
#[derive(Debug, Clone, Copy)]
pub struct RecordValidator {
    policy: CoercionPolicy,
}

impl RecordValidator {
    /// Create a validator with the given coercion policy
    pub fn new(policy: CoercionPolicy) -> Self {
        Self { policy }
    }

    /// The coercion policy this validator applies
    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    /// Validate one raw row, producing a sales record or a rejection
    pub fn validate(&self, raw: &RawRecord) -> Result<SalesRecord, Rejection> {
        let reject = |reason: RejectReason| Rejection {
            row: raw.row,
            reason,
        };

        let product = raw.product.as_deref().unwrap_or("").trim();
        if product.is_empty() {
            return Err(reject(RejectReason::MissingIdentity));
        }

        // Absent fields default to "0": a missing value is zero, not a
        // parse failure, and trips the positivity rules below.
        let quantity = coerce_numeric(
            raw.quantity.as_deref().unwrap_or("0"),
            fields::QUANTITY,
            self.policy,
        )
        .map_err(&reject)?;

        let unit_price = coerce_numeric(
            raw.unit_price.as_deref().unwrap_or("0"),
            fields::UNIT_PRICE,
            self.policy,
        )
        .map_err(&reject)?;

        if quantity <= Decimal::ZERO {
            return Err(reject(RejectReason::NonPositiveQuantity { value: quantity }));
        }

        if unit_price <= Decimal::ZERO {
            return Err(reject(RejectReason::NonPositivePrice { value: unit_price }));
        }

        Ok(SalesRecord::new(product.to_string(), quantity, unit_price))
    }
}
