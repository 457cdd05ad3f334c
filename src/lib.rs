//! Twelve-month payroll calendar: base-salary and bonus pay dates per month,
//! rendered as a table or exported as CSV/JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod payday;
pub mod render;

pub use config::Config;
pub use error::{PayrollError, Result};
pub use model::PayEntry;
pub use payday::{PayrollCalendar, Schedule, base_salary_pay_day, bonus_pay_day};
