use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

use crate::config::Config;

/// Daily-rolling `payroll.log` under the configured log directory. Fails
/// when the directory cannot be created.
pub fn file_appender(config: &Config) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("payroll.log")
        .build(&config.log_dir)
}

/// Install the global subscriber writing to the rolling log file. Stdout is
/// left for rendered output.
///
/// The returned guard flushes pending lines on drop; keep it alive until
/// the program exits.
pub fn init(config: &Config) -> Result<WorkerGuard, InitError> {
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config)?);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    Ok(guard)
}
