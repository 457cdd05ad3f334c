//! Twelve-month payroll schedule.

use chrono::{Months, NaiveDate};
use serde::Serialize;
use tracing::{debug, instrument};

use super::rules::{base_salary_pay_day, bonus_pay_day};
use crate::model::PayEntry;

/// Number of months covered by a schedule.
pub const SCHEDULE_MONTHS: u32 = 12;

/// An ordered run of [`PayEntry`] values, one per month, starting at the
/// reference month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<PayEntry>,
}

impl Schedule {
    /// Build the schedule for `reference`.
    ///
    /// Entry 0 uses `reference` unchanged; entry `i` is `reference` advanced
    /// by `i` calendar months (day clamped to the month's length).
    #[instrument(level = "debug", skip_all, fields(reference = %reference))]
    pub fn generate(reference: NaiveDate) -> Self {
        let entries: Vec<PayEntry> = (0..SCHEDULE_MONTHS)
            .map(|i| {
                let month = if i == 0 {
                    reference
                } else {
                    // Only overflows within a year of NaiveDate::MAX.
                    reference
                        .checked_add_months(Months::new(i))
                        .unwrap_or(reference)
                };
                let entry = PayEntry::new(month, base_salary_pay_day(month), bonus_pay_day(month));
                debug!(
                    month = %entry.date,
                    staff_pay_day = ?entry.staff_pay_day,
                    bonus_pay_day = ?entry.bonus_pay_day,
                    "pay entry computed"
                );
                entry
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[PayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reference month of the first entry.
    pub fn start(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    /// Reference month of the last entry.
    pub fn end(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PayEntry;
    type IntoIter = std::slice::Iter<'a, PayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
