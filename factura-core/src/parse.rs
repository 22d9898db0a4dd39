//! Input-boundary parsing for raw form field values.
//!
//! Form fields arrive as strings typed by a person in a Spanish
//! locale: decimal commas, dd/mm/yyyy dates. Everything here returns
//! a typed error instead of panicking.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Parse a decimal field, accepting either "," or "." as the
/// decimal separator.
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(Error::InvalidNumber(input.to_string()));
    }
    normalized
        .parse()
        .map_err(|_| Error::InvalidNumber(input.to_string()))
}

/// Parse a dd/mm/yyyy date field.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")
        .map_err(|_| Error::InvalidDate(input.to_string()))
}

/// Parse a rate field that is being live-edited: an unparseable or
/// empty value counts as zero rather than an error, so totals keep
/// recomputing while the user types.
pub fn parse_rate_or_zero(input: &str) -> Decimal {
    parse_decimal(input).unwrap_or(Decimal::ZERO)
}
