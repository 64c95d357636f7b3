//! Property tax proration.
//!
//! Texas property taxes are billed in arrears, so at closing the seller owes
//! the share of the year they owned the home. The share is counted in
//! calendar days: the closing date itself is an owned day, so January 1 is
//! one day elapsed and December 31 is the whole year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::sanitize::amount_in_range;

/// Number of days in `year` under the Gregorian calendar.
pub fn days_in_year(year: i32) -> u32 {
    if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
        366
    } else {
        365
    }
}

/// Days of the year elapsed as of `date`, counting `date` itself.
pub fn days_elapsed(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Prorates a yearly amount to the days elapsed as of `as_of`.
///
/// Returns zero if the date is absent or the amount is zero. The amount is
/// coerced into `0..=MAX_AMOUNT` first, like every calculator input.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use netsheet_core::calculations::prorate_yearly_amount;
///
/// let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1);
/// assert_eq!(prorate_yearly_amount(dec!(3660), jan_1), dec!(10));
/// ```
pub fn prorate_yearly_amount(
    yearly_amount: Decimal,
    as_of: Option<NaiveDate>,
) -> Decimal {
    let Some(date) = as_of else {
        return Decimal::ZERO;
    };
    let yearly_amount = amount_in_range(yearly_amount);
    if yearly_amount.is_zero() {
        return Decimal::ZERO;
    }

    let elapsed = Decimal::from(days_elapsed(date));
    let year_length = Decimal::from(days_in_year(date.year()));

    yearly_amount * elapsed / year_length
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::sanitize::MAX_AMOUNT;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // days_in_year / days_elapsed tests
    // =========================================================================

    #[test]
    fn days_in_year_follows_gregorian_rule() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn days_elapsed_counts_the_date_itself() {
        assert_eq!(days_elapsed(date(2025, 1, 1)), 1);
        assert_eq!(days_elapsed(date(2025, 6, 30)), 181);
        assert_eq!(days_elapsed(date(2024, 12, 31)), 366);
    }

    // =========================================================================
    // prorate_yearly_amount tests
    // =========================================================================

    #[test]
    fn prorate_january_first_of_leap_year_is_one_day() {
        let result = prorate_yearly_amount(dec!(3660), Some(date(2024, 1, 1)));

        assert_eq!(result, dec!(10));
    }

    #[test]
    fn prorate_december_31_is_full_year() {
        let result = prorate_yearly_amount(dec!(3650), Some(date(2025, 12, 31)));

        assert_eq!(result, dec!(3650));
    }

    #[test]
    fn prorate_mid_year_keeps_full_precision() {
        let result = prorate_yearly_amount(dec!(6000), Some(date(2025, 6, 30)));

        assert_eq!(round_half_up(result), dec!(2975.34));
        assert_eq!(result, dec!(1086000) / dec!(365));
    }

    #[test]
    fn prorate_without_date_is_zero() {
        assert_eq!(prorate_yearly_amount(dec!(6000), None), Decimal::ZERO);
    }

    #[test]
    fn prorate_zero_amount_is_zero() {
        assert_eq!(
            prorate_yearly_amount(Decimal::ZERO, Some(date(2025, 6, 30))),
            Decimal::ZERO
        );
    }

    #[test]
    fn prorate_uses_366_days_in_leap_year() {
        // Feb 29 is day 60 of 366
        let result = prorate_yearly_amount(dec!(3660), Some(date(2024, 2, 29)));

        assert_eq!(result, dec!(600));
    }

    #[test]
    fn prorate_oversized_amount_is_zero() {
        let result = prorate_yearly_amount(Decimal::MAX, Some(date(2024, 12, 30)));

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn prorate_amount_at_ceiling_is_exact() {
        let result = prorate_yearly_amount(MAX_AMOUNT, Some(date(2024, 12, 31)));

        assert_eq!(result, MAX_AMOUNT);
    }

    #[test]
    fn prorate_negative_amount_is_zero() {
        assert_eq!(
            prorate_yearly_amount(dec!(-6000), Some(date(2025, 6, 30))),
            Decimal::ZERO
        );
    }
}
