//! Test fixtures for record validation testing

use crate::app::models::RawRecord;

mod coercion_tests;

/// Build a raw record at row 1 from optional field texts
pub fn raw_record(
    product: Option<&str>,
    quantity: Option<&str>,
    unit_price: Option<&str>,
) -> RawRecord {
    RawRecord {
        row: 1,
        product: product.map(str::to_string),
        quantity: quantity.map(str::to_string),
        unit_price: unit_price.map(str::to_string),
    }
}
