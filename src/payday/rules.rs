//! The two payroll date rules.
//!
//! Both rules treat Saturday and Sunday as the only non-working days. No
//! holiday calendar is consulted.
//!
//! The rules are total for any date at least two months inside chrono's
//! range, which covers every year accepted by
//! [`parse_reference_month`](crate::model::reference_month::parse_reference_month).
//! The `unwrap_or` fallbacks below only fire at `NaiveDate::MAX`/`MIN`.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::trace;

/// Days added to the same day of the following month to reach the bonus
/// candidate.
pub const BONUS_DAY_OFFSET: u64 = 14;

/// Day of month where the Wednesday search starts when the bonus candidate
/// falls on a weekend. Not derived from [`BONUS_DAY_OFFSET`]: one is an
/// offset, the other a literal day number.
pub const BONUS_SEARCH_START_DAY: u32 = 14;

/// Return `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Last calendar day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Base-salary pay date: the latest Monday–Friday on or before the last day
/// of `date`'s month.
pub fn base_salary_pay_day(date: NaiveDate) -> NaiveDate {
    let month_end = end_of_month(date);
    let mut result = month_end;

    // A Saturday/Sunday weekend means at most two steps back.
    while is_weekend(result) {
        match result.pred_opt() {
            Some(prev) => result = prev,
            None => break,
        }
    }

    if result != month_end {
        trace!(%month_end, pay_day = %result, "month end falls on weekend, moved back");
    }
    result
}

/// Bonus pay date for `date`.
///
/// The candidate is `date` moved to the same day of the next month (clamped
/// to that month's length) plus [`BONUS_DAY_OFFSET`] days. A weekday
/// candidate is returned as is. A weekend candidate is replaced by the first
/// Wednesday on or after day [`BONUS_SEARCH_START_DAY`] of the candidate's
/// month.
pub fn bonus_pay_day(date: NaiveDate) -> NaiveDate {
    let candidate = date
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_add_days(Days::new(BONUS_DAY_OFFSET)))
        .unwrap_or(date);

    if !is_weekend(candidate) {
        return candidate;
    }

    let Some(mut result) =
        NaiveDate::from_ymd_opt(candidate.year(), candidate.month(), BONUS_SEARCH_START_DAY)
    else {
        return candidate;
    };

    // Days 14..=20 always contain a Wednesday.
    while result.weekday() != Weekday::Wed {
        match result.succ_opt() {
            Some(next) => result = next,
            None => break,
        }
    }

    trace!(%candidate, pay_day = %result, "bonus candidate falls on weekend, moved to Wednesday");
    result
}
