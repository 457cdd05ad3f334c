use chrono::NaiveDate;
use serde::Serialize;

/// One row of the payroll schedule.
///
/// Field names serialize in camelCase so the CSV header reads
/// `date,staffPayDay,bonusPayDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayEntry {
    pub date: NaiveDate,
    pub staff_pay_day: Option<NaiveDate>,
    pub bonus_pay_day: Option<NaiveDate>,
}

impl PayEntry {
    pub fn new(date: NaiveDate, staff_pay_day: NaiveDate, bonus_pay_day: NaiveDate) -> Self {
        Self {
            date,
            staff_pay_day: Some(staff_pay_day),
            bonus_pay_day: Some(bonus_pay_day),
        }
    }
}
