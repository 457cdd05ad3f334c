use std::env;
use std::fmt::Write;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use dotenvy::dotenv;
use tracing::Level;

use crate::error::{PayrollError, Result};
use crate::model::OutputFormat;
use crate::model::reference_month::parse_reference_month;

pub const DEFAULT_MONTH_FORMAT: &str = "%B %Y";
pub const DEFAULT_DAY_FORMAT: &str = "%d %a %B %Y";

#[derive(Debug, Clone)]
pub struct Config {
    /// Start month used when none is given on the command line.
    pub start: Option<NaiveDate>,
    pub format: OutputFormat,

    // Display formats (chrono strftime syntax)
    pub month_format: String,
    pub day_format: String,

    pub export_path: PathBuf,

    // Logging
    pub log_dir: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: None,
            format: OutputFormat::Table,
            month_format: DEFAULT_MONTH_FORMAT.to_string(),
            day_format: DEFAULT_DAY_FORMAT.to_string(),
            export_path: PathBuf::from("payroll-schedule.csv"),
            log_dir: PathBuf::from("logs"),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Unset variables keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let start = lookup("PAYROLL_START")
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_reference_month(&v))
            .transpose()?;

        let format = match lookup("PAYROLL_FORMAT") {
            Some(v) => OutputFormat::from_str(v.trim()).map_err(|e| PayrollError::InvalidConfig {
                name: "PAYROLL_FORMAT",
                reason: e.to_string(),
            })?,
            None => defaults.format,
        };

        let month_format = lookup("PAYROLL_MONTH_FORMAT").unwrap_or(defaults.month_format);
        validate_format(&month_format)?;

        let day_format = lookup("PAYROLL_DAY_FORMAT").unwrap_or(defaults.day_format);
        validate_format(&day_format)?;

        let log_level = match lookup("PAYROLL_LOG_LEVEL") {
            Some(v) => Level::from_str(v.trim()).map_err(|e| PayrollError::InvalidConfig {
                name: "PAYROLL_LOG_LEVEL",
                reason: e.to_string(),
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            start,
            format,
            month_format,
            day_format,
            export_path: lookup("PAYROLL_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
            log_dir: lookup("PAYROLL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level,
        })
    }
}

/// Reject strftime strings chrono cannot render for a plain date. Time and
/// timezone specifiers parse fine but fail at render time, so a sample date
/// is formatted as well.
pub fn validate_format(format: &str) -> Result<()> {
    let invalid = || PayrollError::InvalidFormat(format.to_string());

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let sample = NaiveDate::from_ymd_opt(2024, 2, 29).ok_or_else(invalid)?;
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).map_err(|_| invalid())?;
    Ok(())
}
