//! Locale-aware formatting of the current date and time.
//!
//! A [`DateFormatter`] holds no per-call state: each call reads its clock once,
//! resolves the locale, and renders the instant with the configured pattern.
//! Formatting never fails from the caller's side. An invalid pattern or a
//! rendering error yields the unformatted instant instead, and an unknown
//! locale falls back to the default locale.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::constants::{DEFAULT_DATE_FORMAT, FALLBACK_DATE_FORMAT, LOG_FALLBACK_UNFORMATTED};
use crate::error::DateFormatError;
use crate::locale::{resolve_locale, resolve_locale_or};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Locale, Offset, TimeZone, Utc};
use pure_rust_locales::locale_match;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

/// Per-locale customization registered with a formatter.
///
/// An empty customization only registers the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleCustomization {
    /// Pattern used instead of the formatter's pattern for this locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Locale whose names and conventions this identifier borrows (e.g. "en_GB")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl LocaleCustomization {
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            base: None,
        }
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            format: None,
            base: Some(base.into()),
        }
    }
}

/// Formats "now" for a given locale.
#[derive(Clone)]
pub struct DateFormatter {
    pattern: String,
    default_locale: Locale,
    offset: Option<FixedOffset>,
    customizations: HashMap<String, LocaleCustomization>,
    clock: Arc<dyn Clock>,
}

impl DateFormatter {
    /// Formatter with the default pattern, `en_US` fallback, local time and the system clock.
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            default_locale: Locale::en_US,
            offset: None,
            customizations: HashMap::new(),
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Build a formatter from the `[formatter]` and `[locales]` sections of a config.
    pub fn from_config(config: &Config) -> Result<Self, DateFormatError> {
        let mut formatter = Self::new()
            .with_pattern(config.formatter.format.clone())
            .with_default_locale(&config.formatter.default_locale)?;

        if let Some(offset) = &config.formatter.utc_offset {
            formatter = formatter.with_offset(parse_offset(offset)?);
        }

        for (identifier, customization) in &config.locales {
            formatter = formatter.register_locale(identifier, customization.clone());
        }

        Ok(formatter)
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the locale used when a requested identifier cannot be resolved.
    pub fn with_default_locale(mut self, identifier: &str) -> Result<Self, DateFormatError> {
        self.default_locale = resolve_locale(identifier)?;
        Ok(self)
    }

    /// Render in a fixed UTC offset instead of the host's local time zone.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Register a locale identifier together with its customizations.
    pub fn register_locale(mut self, identifier: &str, customization: LocaleCustomization) -> Self {
        self.customizations
            .insert(customization_key(identifier), customization);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Customization registered for exactly this identifier, if any.
    pub fn customization(&self, identifier: &str) -> Option<&LocaleCustomization> {
        self.customizations.get(&customization_key(identifier))
    }

    /// Pattern for an identifier.
    ///
    /// A `format` registered for the bare language also applies to its
    /// regions; a `base` alias only applies to the identifier it was
    /// registered for.
    pub fn pattern_for(&self, identifier: &str) -> &str {
        let key = customization_key(identifier);
        let language = key.split('_').next().unwrap_or_default();
        [key.as_str(), language]
            .iter()
            .find_map(|k| self.customizations.get(*k).and_then(|c| c.format.as_deref()))
            .unwrap_or(self.pattern.as_str())
    }

    /// Current date and time formatted for `locale`.
    pub fn current_date_time(&self, locale: &str) -> String {
        self.format_instant(self.clock.now(), locale)
    }

    /// Format an explicit instant, falling back to the unformatted value on failure.
    pub fn format_instant(&self, instant: DateTime<Utc>, locale: &str) -> String {
        match self.try_format_instant(instant, locale) {
            Ok(formatted) => formatted,
            Err(e) => {
                log::warn!("{}: {}", LOG_FALLBACK_UNFORMATTED, e);
                self.unformatted(instant)
            }
        }
    }

    /// Format an explicit instant and report why formatting failed.
    ///
    /// Unknown locales are not an error; they resolve to the default locale.
    pub fn try_format_instant(&self, instant: DateTime<Utc>, locale: &str) -> Result<String, DateFormatError> {
        let pattern = self.pattern_for(locale);
        let identifier = self
            .customization(locale)
            .and_then(|c| c.base.as_deref())
            .unwrap_or(locale);

        validate_pattern(pattern)?;
        let resolved = resolve_locale_or(identifier, self.default_locale);
        let local = instant.with_timezone(&self.display_offset(instant));

        render(&local, pattern, resolved).map_err(|_| DateFormatError::Render(pattern.to_string()))
    }

    /// The instant as `YYYY-MM-DD HH:MM:SS +HH:MM` in the display offset.
    pub fn unformatted(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.display_offset(instant))
            .format(FALLBACK_DATE_FORMAT)
            .to_string()
    }

    fn display_offset(&self, instant: DateTime<Utc>) -> FixedOffset {
        self.offset
            .unwrap_or_else(|| Local.offset_from_utc_datetime(&instant.naive_utc()))
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateFormatter")
            .field("pattern", &self.pattern)
            .field("default_locale", &self.default_locale)
            .field("offset", &self.offset)
            .field("customizations", &self.customizations)
            .finish_non_exhaustive()
    }
}

/// Check that a pattern is non-empty and every specifier in it is understood.
pub fn validate_pattern(pattern: &str) -> Result<(), DateFormatError> {
    if pattern.trim().is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateFormatError::InvalidPattern(pattern.to_string()));
    }
    Ok(())
}

/// Parse a `+HH:MM` / `-HH:MM` offset; `Z` and `UTC` mean zero.
pub fn parse_offset(value: &str) -> Result<FixedOffset, DateFormatError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    trimmed
        .parse::<FixedOffset>()
        .map_err(|_| DateFormatError::InvalidOffset(value.to_string()))
}

fn render(local: &DateTime<FixedOffset>, pattern: &str, locale: Locale) -> Result<String, fmt::Error> {
    let expanded = expand_locale_specifiers(pattern, locale, 0);
    let mut out = String::new();
    write!(out, "{}", local.format_localized(&expanded, locale))?;
    Ok(out)
}

/// Replace `%c`, `%x`, `%X` and `%r` with the locale's own patterns.
///
/// Locale patterns may themselves contain these specifiers (`en_US` defines
/// `%X` as `%r`), which chrono does not expand past one level.
fn expand_locale_specifiers(pattern: &str, locale: Locale, depth: usize) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(spec @ ('c' | 'x' | 'X' | 'r')) if depth < MAX_EXPANSION_DEPTH => {
                out.push_str(&expand_locale_specifiers(locale_pattern(spec, locale), locale, depth + 1));
            }
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

const MAX_EXPANSION_DEPTH: usize = 4;

/// The locale's pattern for a composite specifier, or the POSIX one when the locale has none.
fn locale_pattern(spec: char, locale: Locale) -> &'static str {
    let (localized, posix) = match spec {
        'c' => (locale_match!(locale => LC_TIME::D_T_FMT), "%a %b %e %T %Y"),
        'x' => (locale_match!(locale => LC_TIME::D_FMT), "%m/%d/%y"),
        'X' => (locale_match!(locale => LC_TIME::T_FMT), "%H:%M:%S"),
        _ => (locale_match!(locale => LC_TIME::T_FMT_AMPM), "%I:%M:%S %p"),
    };
    if localized.trim().is_empty() {
        posix
    } else {
        localized
    }
}

fn customization_key(identifier: &str) -> String {
    identifier.trim().to_ascii_lowercase().replace('-', "_")
}
