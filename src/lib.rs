//! datestamp - locale-aware formatting of the current date and time
//!
//! The whole library revolves around one operation: render "now" as a
//! human-readable string for a locale identifier such as `"en"` or `"de"`.
//!
//! ```no_run
//! let now = datestamp::current_date_time("de");
//! println!("{}", now);
//! ```
//!
//! Callers that need a different pattern, a fixed offset, per-locale
//! customizations, or a pinned clock build their own [`DateFormatter`].
//!
//! # Modules
//!
//! * [`formatter`] - The formatter and its fallback rules
//! * [`clock`] - Where "now" comes from
//! * [`locale`] - Locale identifier resolution
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup for the binary
//! * [`error`] - Error types

/// Clock abstraction so the current instant can be injected
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types for the formatting pipeline
pub mod error;

/// Date formatter
pub mod formatter;

/// Locale identifier resolution
pub mod locale;

/// Logging setup
pub mod logger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DateFormatError;
pub use formatter::{DateFormatter, LocaleCustomization};

use once_cell::sync::Lazy;

static DEFAULT_FORMATTER: Lazy<DateFormatter> = Lazy::new(DateFormatter::new);

/// Current date and time formatted for `locale` with the default pattern.
///
/// Never fails: unknown locales fall back to `en_US`, and a formatting
/// failure yields the unformatted date.
pub fn current_date_time(locale: &str) -> String {
    DEFAULT_FORMATTER.current_date_time(locale)
}
