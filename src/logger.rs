//! Logging setup.
//!
//! Library code logs through the `log` facade only. The binary calls [`init`]
//! once to install a `fern` dispatcher that writes timestamped lines to stderr
//! or to the configured file.

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::LevelFilter;

/// Install the global logger.
///
/// Nothing is installed when logging is disabled and `verbose` is off.
/// `verbose` forces the `debug` level and stderr output when no file is set.
///
/// # Errors
/// Fails on an unknown level, an unwritable log file, or when a logger is
/// already installed.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    if !config.enabled && !verbose {
        return Ok(());
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        parse_level(&config.level)?
    };

    let base = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(&Local::now(), record.level(), record.target(), &message.to_string())
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => {
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            base.chain(file)
        }
        None => base.chain(std::io::stderr()),
    };

    dispatch.apply().context("Logger is already initialized")?;
    log::debug!("Logging initialized at level {}", level);
    Ok(())
}

/// Parse a level name such as "info" or "DEBUG".
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", level))
}

/// Render one log line: `[HH:MM:SS.mmm] LEVEL target: message`.
pub fn format_line(time: &DateTime<Local>, level: log::Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", time.format(LOG_TIMESTAMP_FORMAT), level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let time = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 5).unwrap();
        let line = format_line(&time, log::Level::Warn, "datestamp::formatter", "fell back");
        assert_eq!(line, "[10:30:05.000] WARN  datestamp::formatter: fell back");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert!(parse_level("loud").is_err());
    }
}
