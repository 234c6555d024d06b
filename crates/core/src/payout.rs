//! Payout total proration.
//!
//! A payout's persisted `total` is derived from its date range and
//! monthly amount. The formula is deliberately the historical one:
//! full months use calendar arithmetic, but the leftover days are
//! priced at `amount / 30` regardless of the actual month length.
//! Finance reconciles against this exact number, so do not "fix" it.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::dates::calendar_delta;

/// Divisor applied to the monthly amount for leftover days.
const DAYS_PER_MONTH: u32 = 30;

/// Compute the prorated total for a payout covering `[start, end]`
/// (inclusive) at `amount` per month, rounded to 2 decimal places.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use corehr_core::payout::payout_total;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let total = payout_total(start, end, Decimal::new(90000, 2));
/// assert_eq!(total, Decimal::new(90000, 2)); // one full month
/// ```
pub fn payout_total(start: NaiveDate, end: NaiveDate, amount: Decimal) -> Decimal {
    // The range is inclusive of the end day.
    let delta = calendar_delta(start, end + Days::new(1));

    let years = Decimal::from(delta.years);
    let months = Decimal::from(delta.months);
    let days = Decimal::from(delta.days);

    let total = years * Decimal::from(12) * amount
        + months * amount
        + days * (amount / Decimal::from(DAYS_PER_MONTH));

    total.round_dp(2)
}
