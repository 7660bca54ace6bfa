//! Constants used throughout the crate
//!
//! This module centralizes default values, file names, and user-facing
//! messages so the library and the binary agree on them.

// Formatting defaults
/// Pattern used when no `format` is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y %-I:%M %p";
/// Locale used when the requested one cannot be resolved.
pub const DEFAULT_LOCALE: &str = "en_US";
/// Layout of the unformatted fallback string.
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

// Configuration files
pub const CONFIG_FILE_NAME: &str = "datestamp.toml";
pub const CONFIG_DIR_NAME: &str = "datestamp";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";

// Logging
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FALLBACK_UNFORMATTED: &str = "⚠️ Could not format date, using unformatted value";
pub const LOG_FALLBACK_LOCALE: &str = "Unknown locale, using default";
