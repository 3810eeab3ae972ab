//! Numeric field coercion
//!
//! Converts raw string fields into exact decimals. Currency math must not
//! accumulate binary floating point drift, so every numeric field in the
//! pipeline is a [`Decimal`].

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::app::models::{CoercionPolicy, RejectReason};

/// Interpret a raw string as a decimal number under the given policy
///
/// Whitespace around the value is trimmed before parsing. On parse failure
/// (empty, whitespace-only, or non-numeric text) the lenient policy yields
/// zero and never fails the caller; the strict policy yields a
/// [`RejectReason::InvalidField`] naming the field and the offending text.
///
/// A genuinely absent field is the caller's responsibility: the validator
/// substitutes `"0"` before calling here, so absence reads as zero rather
/// than as a parse failure.
pub fn coerce_numeric(
    raw: &str,
    field: &'static str,
    policy: CoercionPolicy,
) -> Result<Decimal, RejectReason> {
    match Decimal::from_str(raw.trim()) {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            CoercionPolicy::Lenient => Ok(Decimal::ZERO),
            CoercionPolicy::Strict => Err(RejectReason::InvalidField {
                field,
                value: raw.to_string(),
            }),
        },
    }
}
