use chrono::NaiveDate;
use tracing::{debug, info};

use super::schedule::Schedule;

/// Holds the selected start month and the schedule derived from it.
///
/// Every call to [`PayrollCalendar::set_start`] throws the old schedule away
/// and recomputes it from scratch. An unset start month leaves no schedule.
#[derive(Debug, Default, Clone)]
pub struct PayrollCalendar {
    start: Option<NaiveDate>,
    schedule: Option<Schedule>,
}

impl PayrollCalendar {
    pub fn new(start: Option<NaiveDate>) -> Self {
        let mut calendar = Self::default();
        calendar.set_start(start);
        calendar
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.start = start;
        self.schedule = start.map(Schedule::generate);

        match start {
            Some(month) => info!(%month, "payroll schedule regenerated"),
            None => debug!("start month cleared, schedule dropped"),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }
}
