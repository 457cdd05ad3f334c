use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use payroll_calendar::cli::{self, Cli};
use payroll_calendar::{Config, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;

    // Rolling daily log
    let _guard = logging::init(&config).context("failed to open log directory")?;

    info!(command = ?cli.command, "payroll-calendar starting...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    cli::run(cli, &config, stdin.lock(), &mut out, &mut err).context("payroll-calendar failed")?;
    out.flush()?;

    Ok(())
}
