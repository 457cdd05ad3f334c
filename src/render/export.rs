use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::table::{DateFormats, write_table};
use crate::error::Result;
use crate::model::OutputFormat;
use crate::payday::Schedule;

/// Write one CSV row per entry under a `date,staffPayDay,bonusPayDay` header.
pub fn write_csv<W: Write>(out: W, schedule: &Schedule) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for entry in schedule {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the schedule as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut out: W, schedule: &Schedule) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, schedule)?;
    writeln!(out)?;
    Ok(())
}

/// Write `schedule` in `format`.
pub fn write_schedule<W: Write>(
    out: &mut W,
    schedule: &Schedule,
    format: OutputFormat,
    formats: &DateFormats,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, schedule, formats),
        OutputFormat::Csv => write_csv(out, schedule),
        OutputFormat::Json => write_json(out, schedule),
    }
}

/// Write `schedule` to a file at `path`, replacing any existing file.
/// Returns the number of entries written.
pub fn export_to_path(
    path: &Path,
    schedule: &Schedule,
    format: OutputFormat,
    formats: &DateFormats,
) -> Result<usize> {
    let mut out = BufWriter::new(File::create(path)?);
    write_schedule(&mut out, schedule, format, formats)?;
    out.flush()?;

    info!(path = %path.display(), rows = schedule.len(), %format, "schedule exported");
    Ok(schedule.len())
}
