//! Tests for numeric field coercion

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::app::models::{CoercionPolicy, RejectReason};
use crate::app::services::record_validator::coerce_numeric;

#[test]
fn test_parses_integer_and_fractional_text() {
    for policy in [CoercionPolicy::Strict, CoercionPolicy::Lenient] {
        assert_eq!(coerce_numeric("3", "quantity", policy), Ok(dec!(3)));
        assert_eq!(coerce_numeric("10.00", "unit_price", policy), Ok(dec!(10.00)));
        assert_eq!(coerce_numeric("-1", "quantity", policy), Ok(dec!(-1)));
        assert_eq!(coerce_numeric("0.001", "unit_price", policy), Ok(dec!(0.001)));
    }
}

#[test]
fn test_trims_surrounding_whitespace() {
    assert_eq!(
        coerce_numeric("  2.50 ", "unit_price", CoercionPolicy::Strict),
        Ok(dec!(2.50))
    );
}

#[test]
fn test_strict_rejects_malformed_text() {
    for value in ["abc", "", "   ", "1.2.3", "$5"] {
        let result = coerce_numeric(value, "unit_price", CoercionPolicy::Strict);
        match result {
            Err(RejectReason::InvalidField { field, value: raw }) => {
                assert_eq!(field, "unit_price");
                assert_eq!(raw, value);
            }
            other => panic!("Expected InvalidField for '{}', got {:?}", value, other),
        }
    }
}

#[test]
fn test_lenient_coerces_malformed_text_to_zero() {
    for value in ["abc", "", "   ", "1.2.3", "$5"] {
        assert_eq!(
            coerce_numeric(value, "quantity", CoercionPolicy::Lenient),
            Ok(Decimal::ZERO)
        );
    }
}

#[test]
fn test_exact_decimal_arithmetic() {
    // 0.1 + 0.2 must equal 0.3 exactly, unlike binary floating point
    let a = coerce_numeric("0.1", "unit_price", CoercionPolicy::Strict).unwrap();
    let b = coerce_numeric("0.2", "unit_price", CoercionPolicy::Strict).unwrap();
    assert_eq!(a + b, dec!(0.3));
}
