pub mod catalog;
pub mod performance;
pub mod plans;
pub mod schedule;
pub mod students;

use crate::error::{ApiError, Result};

/// Parse a class number path segment
fn parse_class_num(raw: &str) -> Result<u32> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid class number".to_string()))
}
