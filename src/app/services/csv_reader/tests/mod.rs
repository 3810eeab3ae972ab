//! Test fixtures and helpers for CSV reader testing

use std::io::Write;
use tempfile::NamedTempFile;


/// Write CSV content to a temporary file and return its handle
pub fn create_csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Standard-profile CSV content with three well-formed rows
pub fn standard_csv() -> &'static str {
    "product_name,quantity,unit_price\n\
     Widget,3,10.00\n\
     Widget,2,10.00\n\
     Gadget,1,50.00\n"
}

/// Compact-profile CSV content with two well-formed rows
pub fn compact_csv() -> &'static str {
    "product,quantity,price\n\
     Widget,3,10.00\n\
     Gadget,1,50.00\n"
}
