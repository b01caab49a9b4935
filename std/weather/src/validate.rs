//! Date validation for tool input.
//!
//! Dates must pass [`validate_date`] before they reach the synthesizer.

use chrono::NaiveDate;
use regress::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::report::DATE_FORMAT;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

/// Errors from date validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Not `YYYY-MM-DD`, or not a real calendar day.
    #[error("Invalid date format, expected YYYY-MM-DD")]
    InvalidFormat(String),
}

/// Validate a `YYYY-MM-DD` date string.
///
/// Steps:
/// 1. Match the exact `\d{4}-\d{2}-\d{2}` shape
/// 2. Parse it as a proleptic Gregorian calendar date
pub fn validate_date(date: &str) -> Result<NaiveDate, DateError> {
    if DATE_PATTERN.find(date).is_none() {
        return Err(DateError::InvalidFormat(date.into()));
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| DateError::InvalidFormat(date.into()))
}
