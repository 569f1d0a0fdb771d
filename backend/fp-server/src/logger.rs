use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use fp_config::LogLevel;
use log::{LevelFilter, Record, info};

/// Install the global logger.
///
/// Writes to `log_file` when given, otherwise stdout. `colored` only applies
/// to stdout. Statements from sqlx are capped at warn.
pub fn initialize(
    level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = LevelFilter::from(level);

    let output = match log_file.as_deref() {
        Some(path) => file_output(path)?,
        None if colored => colored_stdout(),
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, record.level(), message, None))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {level} to {}", path.display()),
        None => info!("Logging at {level} to stdout"),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn file_output(path: &Path) -> ServerErrorResult<Dispatch> {
    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("Cannot open log file {}: {e}", path.display()),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            write_line(out, record.level(), message, Some(record))
        })
        .chain(file))
}

fn colored_stdout() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            write_line(out, colors.color(record.level()), message, Some(record))
        })
        .chain(std::io::stdout())
}

/// `[timestamp - LEVEL] message`, plus `[file:line]` when `origin` is set
fn write_line(
    out: FormatCallback<'_>,
    level: impl Display,
    message: &std::fmt::Arguments<'_>,
    origin: Option<&Record<'_>>,
) {
    let now = humantime::format_rfc3339(SystemTime::now());
    match origin {
        Some(record) => out.finish(format_args!(
            "[{now} - {level}] {message} [{}:{}]",
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        )),
        None => out.finish(format_args!("[{now} - {level}] {message}")),
    }
}
