pub mod calendar;
pub mod rules;
pub mod schedule;

pub use calendar::PayrollCalendar;
pub use rules::{base_salary_pay_day, bonus_pay_day};
pub use schedule::{SCHEDULE_MONTHS, Schedule};
