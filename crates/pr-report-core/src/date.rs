//! Report date handling.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Format of report dates, both accepted and emitted.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `input` is shaped `dddd-dd-dd`.
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a `YYYY-MM-DD` date and return it in canonical form.
///
/// Only zero-padded `dddd-dd-dd` input is accepted, so `2024-3-1` and
/// `+2024-03-01` are rejected.
pub fn parse_report_date(input: &str) -> Result<String> {
    if !has_date_shape(input) {
        return Err(Error::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|e| Error::InvalidDate(format!("{}: {}", input, e)))
}
