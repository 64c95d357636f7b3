//! Display formatting for amounts, percentages and dates.

use chrono::NaiveDate;
use netsheet_core::calculations::common::round_whole;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-dollar en-US currency: `$1,234`, `-$1,234`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_whole(amount);
    let digits = group_thousands(&rounded.abs().trunc().to_string());
    if rounded < Decimal::ZERO {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One decimal place with a `%` suffix: `58.0%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// `Fri, Oct 16, 2026`.
pub fn format_step_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// `October 16, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_groups_thousands_and_rounds_to_whole_dollars() {
        assert_eq!(format_currency(dec!(165549.66)), "$165,550");
        assert_eq!(format_currency(dec!(1250000)), "$1,250,000");
        assert_eq!(format_currency(dec!(999.49)), "$999");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn currency_marks_negative_amounts() {
        assert_eq!(format_currency(dec!(-16000)), "-$16,000");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(dec!(58)), "58.0%");
        assert_eq!(format_percent(dec!(12.345)), "12.3%");
        assert_eq!(format_percent(dec!(107)), "107.0%");
    }

    #[test]
    fn dates_use_en_us_forms() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 8).unwrap();

        assert_eq!(format_step_date(date), "Fri, Jan 8, 2027");
        assert_eq!(format_long_date(date), "January 8, 2027");
    }
}
