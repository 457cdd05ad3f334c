use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::Result;
use crate::model::OutputFormat;
use crate::model::reference_month::{current_month, parse_reference_month};
use crate::payday::{PayrollCalendar, Schedule};
use crate::render::{DateFormats, export_to_path, write_schedule};

#[derive(Debug, Parser)]
#[command(name = "payroll-calendar")]
#[command(about = "Twelve-month base-salary and bonus pay date calendar")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the schedule to stdout
    Show {
        /// Start month, YYYY-MM (defaults to PAYROLL_START or the current month)
        #[arg(long, value_parser = parse_reference_month)]
        start: Option<NaiveDate>,
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Write the schedule to a file
    Export {
        #[arg(long, value_parser = parse_reference_month)]
        start: Option<NaiveDate>,
        /// Destination file (defaults to PAYROLL_EXPORT_PATH)
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, default_value = "csv")]
        format: OutputFormat,
    },
    /// Read start months from stdin and re-render on every line
    Interactive {
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

/// Execute the parsed command. Rendered output goes to `out`, rejected
/// interactive input to `err`.
pub fn run<R, W, E>(cli: Cli, config: &Config, input: R, out: &mut W, err: &mut E) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let formats = DateFormats::from_config(config)?;
    let command = cli.command.unwrap_or(Command::Show {
        start: None,
        format: None,
    });

    match command {
        Command::Show { start, format } => {
            let start = resolve_start(start, config);
            let schedule = Schedule::generate(start);
            write_schedule(out, &schedule, format.unwrap_or(config.format), &formats)?;
        }
        Command::Export {
            start,
            output,
            format,
        } => {
            let start = resolve_start(start, config);
            let path = output.unwrap_or_else(|| config.export_path.clone());
            let schedule = Schedule::generate(start);
            let rows = export_to_path(&path, &schedule, format, &formats)?;
            writeln!(out, "Wrote {rows} rows to {}", path.display())?;
        }
        Command::Interactive { format } => {
            let start = resolve_start(None, config);
            interactive(input, out, err, start, format.unwrap_or(config.format), &formats)?;
        }
    }

    Ok(())
}

fn resolve_start(start: Option<NaiveDate>, config: &Config) -> NaiveDate {
    start.or(config.start).unwrap_or_else(current_month)
}

/// One line per start month. An empty line clears the selection and
/// renders nothing; `quit`, `exit` or end of input stops.
#[instrument(skip_all, fields(initial = %initial, format = %format))]
fn interactive<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    initial: NaiveDate,
    format: OutputFormat,
    formats: &DateFormats,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut calendar = PayrollCalendar::new(Some(initial));
    render(out, &calendar, format, formats)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "quit" | "exit" => break,
            "" => calendar.set_start(None),
            value => match parse_reference_month(value) {
                Ok(month) => calendar.set_start(Some(month)),
                Err(e) => {
                    warn!(input = value, "ignoring unparsable start month");
                    writeln!(err, "{e}")?;
                    continue;
                }
            },
        }

        render(out, &calendar, format, formats)?;
    }

    info!("interactive session finished");
    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    calendar: &PayrollCalendar,
    format: OutputFormat,
    formats: &DateFormats,
) -> Result<()> {
    if let Some(schedule) = calendar.schedule() {
        write_schedule(out, schedule, format, formats)?;
        writeln!(out)?;
    }
    Ok(())
}
