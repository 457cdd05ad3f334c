use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{PayrollError, Result};

/// Years accepted as reference months. Keeps every schedule date far from
/// the ends of chrono's range.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// Parse a user-supplied reference month.
///
/// `YYYY-MM` is normalized to the first of the month. A full `YYYY-MM-DD`
/// date is kept as given. Years outside [`YEAR_RANGE`] are rejected.
pub fn parse_reference_month(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let invalid = || PayrollError::InvalidMonth(trimmed.to_string());

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d"))
        .map_err(|_| invalid())?;

    if !YEAR_RANGE.contains(&date.year()) {
        return Err(invalid());
    }
    Ok(date)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the current local month.
pub fn current_month() -> NaiveDate {
    start_of_month(Local::now().date_naive())
}
