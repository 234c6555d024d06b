//! Contract date arithmetic.
//!
//! Contract and proposal end dates are always *derived*:
//! `end = start + months (calendar) + extra days - 1 day`. Month
//! addition is calendar-accurate and clamps to month end
//! (Jan 31 + 1 month = Feb 28/29). The calendar delta used by payout
//! proration mirrors that clamping when it borrows a month.
//!
//! Every predicate takes `today` explicitly; nothing in this module
//! reads a clock.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Days before a contract ends at which it counts as expiring soon,
/// unless the caller supplies its own window.
pub const DEFAULT_ENDING_WARNING_DAYS: u32 = 30;

/// Derive a contract or proposal end date from its start and duration.
///
/// `additional_days` defaults to 0 at the model layer when unset.
pub fn contract_end_date(start: NaiveDate, months_duration: u32, additional_days: u32) -> NaiveDate {
    start + Months::new(months_duration) + Days::new(u64::from(additional_days)) - Days::new(1)
}

/// Calendar difference between two dates, split into years, months and
/// leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

/// Compute the calendar delta from `from` to `to`.
///
/// The month count is anchored at `from` and clamped to month ends, so
/// `2024-01-31 -> 2024-03-01` is one month (Jan 31 + 1 month = Feb 29)
/// plus one day. When `to` precedes `from` all components come back
/// negated.
pub fn calendar_delta(from: NaiveDate, to: NaiveDate) -> CalendarDelta {
    if to < from {
        let d = calendar_delta(to, from);
        return CalendarDelta {
            years: -d.years,
            months: -d.months,
            days: -d.days,
        };
    }

    let mut total_months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut anchor = shift_months(from, total_months);
    if anchor > to {
        // Overshot because of day-of-month: borrow one month back.
        total_months -= 1;
        anchor = shift_months(from, total_months);
    }
    let days = (to - anchor).num_days();

    CalendarDelta {
        years: total_months / 12,
        months: total_months % 12,
        days,
    }
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date + Months::new(months as u32)
    } else {
        date - Months::new(months.unsigned_abs())
    }
}

/// A contract is active when `today` falls inside `[start, end]`.
pub fn is_active(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> bool {
    start <= today && today <= end
}

/// A contract is expiring soon when its end is at most `warn_days`
/// away and not already past.
pub fn is_expiring_soon(end: NaiveDate, today: NaiveDate, warn_days: u32) -> bool {
    let days_to_end = (end - today).num_days();
    0 <= days_to_end && days_to_end <= i64::from(warn_days)
}

/// Renewal is offered for contracts expiring soon or already expired.
pub fn can_be_renewed(end: NaiveDate, today: NaiveDate, warn_days: u32) -> bool {
    is_expiring_soon(end, today, warn_days) || today > end
}
