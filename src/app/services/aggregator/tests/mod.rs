//! Test fixtures for aggregation testing

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::app::models::SalesRecord;


/// Build a sales record from string literals
pub fn record(product: &str, quantity: &str, unit_price: &str) -> SalesRecord {
    SalesRecord::new(
        product.to_string(),
        Decimal::from_str(quantity).unwrap(),
        Decimal::from_str(unit_price).unwrap(),
    )
}

/// The three-row scenario used throughout the aggregate tests:
/// two Widget orders and one Gadget order, both products at 50.00 total
pub fn scenario_records() -> Vec<SalesRecord> {
    vec![
        record("Widget", "3", "10.00"),
        record("Widget", "2", "10.00"),
        record("Gadget", "1", "50.00"),
    ]
}
