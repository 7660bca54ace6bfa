//! Error types for date formatting.
//!
//! None of these reach callers of [`crate::current_date_time`]; the formatter
//! absorbs them and falls back. They are public so configuration validation
//! and [`crate::DateFormatter::try_format_instant`] can report them.

/// Failure modes of the formatting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateFormatError {
    #[error("Invalid format pattern: '{0}'")]
    InvalidPattern(String),

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Invalid UTC offset '{0}', expected something like +02:00")]
    InvalidOffset(String),

    #[error("Failed to render date with pattern '{0}'")]
    Render(String),
}
