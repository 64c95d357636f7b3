//! Shared decimal helpers for the estimators.
//!
//! The calculators keep full precision in their output records; rounding
//! happens only when a value is shown to someone.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to cents using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use netsheet_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2975.3424)), dec!(2975.34));
/// assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to whole currency units, midpoint away from zero.
///
/// This is the rounding applied to every amount on a printed net sheet.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netsheet_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(165549.66)), dec!(165550));
/// assert_eq!(round_whole(dec!(2975.5)), dec!(2976));
/// assert_eq!(round_whole(dec!(2975.49)), dec!(2975));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use netsheet_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-150000), Decimal::ZERO), Decimal::ZERO);
/// assert_eq!(max(dec!(12.5), dec!(3)), dec!(12.5));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
