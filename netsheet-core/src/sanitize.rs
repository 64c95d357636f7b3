//! Boundary sanitization for text typed into estimator forms.
//!
//! The calculators never see raw text. Every currency or percentage field is
//! passed through one of the functions below first:
//!
//! * the lenient functions (`sanitize_*`) coerce anything unusable to zero and
//!   log a warning, so an estimate can always be produced;
//! * [`parse_amount`] is the strict variant that reports the same cases as
//!   errors instead.
//!
//! Both accept `1,234.56`, ` $1,234 ` and the empty string (zero). Amounts
//! above [`MAX_AMOUNT`] are treated as unusable, which keeps every product
//! the calculators form well inside `Decimal`'s range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Largest value accepted for a percentage field.
const MAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Largest accepted amount: one trillion (1,000,000,000,000).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Error returned by [`parse_amount`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// The text is not a number once formatting characters are removed.
    #[error("invalid amount '{0}'")]
    Invalid(String),

    /// The text is a number below zero.
    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),

    /// The text is a number above [`MAX_AMOUNT`].
    #[error("amount must not exceed {max}, got {0}", max = MAX_AMOUNT)]
    TooLarge(Decimal),

    /// The text is a percentage above 100.
    #[error("percentage must not exceed 100, got {0}")]
    PercentOutOfRange(Decimal),

    /// The text is not an ISO `YYYY-MM-DD` date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Trims whitespace and removes the `$` prefix and `,` grouping separators.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$' && !c.is_whitespace())
        .collect()
}

/// Parses a currency amount, rejecting malformed, negative and oversized
/// input.
///
/// Empty or whitespace-only input is treated as 0.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netsheet_core::sanitize::{AmountError, parse_amount};
///
/// assert_eq!(parse_amount("$1,250,000").unwrap(), dec!(1250000));
/// assert_eq!(parse_amount("-5"), Err(AmountError::Negative(dec!(-5))));
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, AmountError> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = normalized
        .parse()
        .map_err(|_| AmountError::Invalid(s.to_string()))?;
    if value < Decimal::ZERO {
        return Err(AmountError::Negative(value));
    }
    if value > MAX_AMOUNT {
        return Err(AmountError::TooLarge(value));
    }
    Ok(value)
}

/// Parses a percentage, rejecting everything [`sanitize_percent`] would
/// coerce.
pub fn parse_percent(s: &str) -> Result<Decimal, AmountError> {
    let value = parse_amount(s)?;
    if value > MAX_PERCENT {
        return Err(AmountError::PercentOutOfRange(value));
    }
    Ok(value)
}

/// Parses an optional ISO date, rejecting text [`parse_date`] would drop.
pub fn parse_date_strict(s: &str) -> Result<Option<NaiveDate>, AmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AmountError::InvalidDate(s.to_string()))
}

/// Parses a currency amount, coercing malformed, negative or oversized input
/// to zero.
pub fn sanitize_amount(s: &str) -> Decimal {
    match parse_amount(s) {
        Ok(value) => value,
        Err(e) => {
            warn!(input = %s, "{e}; using 0");
            Decimal::ZERO
        }
    }
}

/// Parses a percentage, coercing malformed, negative or >100 input to zero.
pub fn sanitize_percent(s: &str) -> Decimal {
    match parse_percent(s) {
        Ok(value) => value,
        Err(e) => {
            warn!(input = %s, "{e}; using 0");
            Decimal::ZERO
        }
    }
}

/// Coerces an already-typed amount outside `0..=MAX_AMOUNT` to zero.
pub fn amount_in_range(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        warn!(value = %value, "negative amount; using 0");
        return Decimal::ZERO;
    }
    if value > MAX_AMOUNT {
        warn!(value = %value, "amount above {MAX_AMOUNT}; using 0");
        return Decimal::ZERO;
    }
    value
}

/// Coerces an already-typed percentage outside `0..=100` to zero.
pub fn percent_in_range(value: Decimal) -> Decimal {
    if value > MAX_PERCENT {
        warn!(value = %value, "percentage above 100; using 0");
        return Decimal::ZERO;
    }
    amount_in_range(value)
}

/// Parses an ISO `YYYY-MM-DD` date. Empty or unparseable input yields `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_or_else(
        |e| {
            warn!(input = %s, "invalid date: {}", e);
            None
        },
        Some,
    )
}

/// Parses a yes/no style flag. Empty input yields `default`.
pub fn parse_flag(
    s: &str,
    default: bool,
) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
