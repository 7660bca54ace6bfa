//! Configuration management for datestamp
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATE_FORMAT, DEFAULT_LOCALE, LOG_LEVELS,
    XDG_CONFIG_FILE_NAME,
};
use crate::formatter::{self, LocaleCustomization};
use crate::locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formatter: FormatterConfig,
    /// Per-locale customizations keyed by locale identifier
    pub locales: BTreeMap<String, LocaleCustomization>,
    pub logging: LoggingConfig,
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// strftime-style pattern used to render the date
    pub format: String,
    /// Locale used when the requested one is unknown
    pub default_locale: String,
    /// Fixed offset such as "+01:00"; the host time zone is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// One of off, error, warn, info, debug, trace
    pub level: String,
    /// Write log lines to this file instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            utc_offset: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            log::debug!("Loading configuration from {}", path.display());
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(XDG_CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        formatter::validate_pattern(&self.formatter.format).context("Invalid [formatter] format")?;

        locale::resolve_locale(&self.formatter.default_locale).context("Invalid [formatter] default_locale")?;

        if let Some(offset) = &self.formatter.utc_offset {
            formatter::parse_offset(offset).context("Invalid [formatter] utc_offset")?;
        }

        for (identifier, customization) in &self.locales {
            self.validate_customization(identifier, customization)?;
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid [logging] level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Validate a single locale customization
    fn validate_customization(&self, identifier: &str, customization: &LocaleCustomization) -> Result<()> {
        if identifier.trim().is_empty() {
            anyhow::bail!("Locale identifiers in [locales] cannot be empty");
        }

        if let Some(format) = &customization.format {
            formatter::validate_pattern(format).with_context(|| format!("Locale '{}': invalid format", identifier))?;
        }

        if let Some(base) = &customization.base {
            locale::resolve_locale(base).with_context(|| format!("Locale '{}': invalid base", identifier))?;
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# datestamp Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &annotate_default_config(&toml_content);

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(XDG_CONFIG_FILE_NAME))
    }
}

/// Add commented hints for optional settings that serialization omits.
fn annotate_default_config(toml_content: &str) -> String {
    let mut out = String::with_capacity(toml_content.len() + 256);
    for line in toml_content.lines() {
        out.push_str(line);
        out.push('\n');
        match line.trim() {
            "[formatter]" => out.push_str("# utc_offset = \"+01:00\"\n"),
            "[logging]" => out.push_str("# file = \"/tmp/datestamp.log\"\n"),
            _ => {}
        }
    }
    out.push_str(
        "\n# Per-locale customizations\n\
         # [locales.de]\n\
         # format = \"%A, %-d. %B %Y %H:%M\"\n\
         #\n\
         # [locales.x-pirate]\n\
         # base = \"en_GB\"\n",
    );
    out
}
