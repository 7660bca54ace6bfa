//! Locale identifier resolution.
//!
//! Callers pass loose identifiers such as `"en"`, `"de-AT"` or
//! `"fr_CA.UTF-8"`. The formatting library only knows full POSIX-style names
//! (`en_US`, `de_AT`, ...), so identifiers are normalized first and bare
//! languages are mapped to their primary region.

use crate::error::DateFormatError;
use chrono::Locale;

/// Primary region for languages whose POSIX name is not simply `xx_XX`.
const PRIMARY_REGIONS: &[(&str, &str)] = &[
    ("ar", "ar_SA"),
    ("ca", "ca_ES"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("et", "et_EE"),
    ("eu", "eu_ES"),
    ("gl", "gl_ES"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("nn", "nn_NO"),
    ("no", "nb_NO"),
    ("sl", "sl_SI"),
    ("sr", "sr_RS"),
    ("sv", "sv_SE"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
    ("zh", "zh_CN"),
];

/// Resolve a locale identifier to a locale known to the formatting library.
///
/// # Errors
/// Returns [`DateFormatError::UnknownLocale`] if no candidate name matches.
pub fn resolve_locale(identifier: &str) -> Result<Locale, DateFormatError> {
    candidates(identifier)
        .iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok())
        .ok_or_else(|| DateFormatError::UnknownLocale(identifier.to_string()))
}

/// Resolve a locale identifier, falling back to `default` when it is unknown.
pub fn resolve_locale_or(identifier: &str, default: Locale) -> Locale {
    match resolve_locale(identifier) {
        Ok(locale) => locale,
        Err(e) => {
            log::debug!("{}: {}", crate::constants::LOG_FALLBACK_LOCALE, e);
            default
        }
    }
}

/// Whether an identifier resolves to a known locale.
pub fn is_supported(identifier: &str) -> bool {
    resolve_locale(identifier).is_ok()
}

/// Normalize an identifier to `lang` or `lang_REGION`.
///
/// Hyphens become underscores, the language is lower-cased, the region is
/// upper-cased, script subtags are dropped, and any `.codeset` or `@modifier`
/// suffix is stripped.
pub fn normalize(identifier: &str) -> String {
    let base = identifier
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());
    let language = match parts.next() {
        Some(lang) => lang.to_ascii_lowercase(),
        None => return String::new(),
    };

    let region = parts
        .filter(|p| is_region_subtag(p))
        .last()
        .map(|r| r.to_ascii_uppercase());

    match region {
        Some(region) => format!("{}_{}", language, region),
        None => language,
    }
}

/// A region is two letters or three digits; anything else is a script or variant.
fn is_region_subtag(part: &str) -> bool {
    (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
}

/// Names to try, most specific first.
fn candidates(identifier: &str) -> Vec<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut names = vec![trimmed.to_string()];
    let normalized = normalize(trimmed);
    if normalized.is_empty() {
        return names;
    }
    names.push(normalized.clone());

    let language = normalized.split('_').next().unwrap_or_default().to_string();
    if language != normalized {
        names.push(language.clone());
    }
    if let Some((_, primary)) = PRIMARY_REGIONS.iter().find(|(lang, _)| *lang == language) {
        names.push((*primary).to_string());
    }
    names.push(format!("{}_{}", language, language.to_ascii_uppercase()));

    names.dedup();
    names
}
