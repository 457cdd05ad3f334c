use std::io::Write;

use chrono::NaiveDate;

use crate::config::{Config, DEFAULT_DAY_FORMAT, DEFAULT_MONTH_FORMAT, validate_format};
use crate::error::Result;
use crate::payday::Schedule;

const HEADERS: [&str; 3] = ["Date", "Staff pay date", "Bonus pay date"];

/// Validated strftime strings for the table columns.
#[derive(Debug, Clone)]
pub struct DateFormats {
    month: String,
    day: String,
}

impl DateFormats {
    pub fn new(month: impl Into<String>, day: impl Into<String>) -> Result<Self> {
        let month = month.into();
        let day = day.into();
        validate_format(&month)?;
        validate_format(&day)?;
        Ok(Self { month, day })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.month_format.clone(), config.day_format.clone())
    }

    pub fn month(&self, date: NaiveDate) -> String {
        date.format(&self.month).to_string()
    }

    pub fn day(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| d.format(&self.day).to_string())
            .unwrap_or_default()
    }
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            month: DEFAULT_MONTH_FORMAT.to_string(),
            day: DEFAULT_DAY_FORMAT.to_string(),
        }
    }
}

/// Render the schedule as a plain-text table with left-aligned columns.
pub fn write_table<W: Write>(out: &mut W, schedule: &Schedule, formats: &DateFormats) -> Result<()> {
    let rows: Vec<[String; 3]> = schedule
        .entries()
        .iter()
        .map(|entry| {
            [
                formats.month(entry.date),
                formats.day(entry.staff_pay_day),
                formats.day(entry.bonus_pay_day),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "Payroll schedule")?;
    writeln!(out)?;
    write_row(out, &HEADERS.map(String::from), &widths)?;
    write_row(out, &widths.map(|w| "-".repeat(w)), &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 3], widths: &[usize; 3]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}
