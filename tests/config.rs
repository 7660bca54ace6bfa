use chrono::{TimeZone, Utc};
use datestamp::config::Config;
use datestamp::constants::{DEFAULT_DATE_FORMAT, DEFAULT_LOCALE};
use datestamp::{DateFormatter, LocaleCustomization};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.formatter.format, DEFAULT_DATE_FORMAT);
    assert_eq!(config.formatter.default_locale, DEFAULT_LOCALE);
    assert!(config.formatter.utc_offset.is_none());
    assert!(config.locales.is_empty());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid pattern should fail
    config.formatter.format = "%Y-%Q".to_string();
    assert!(config.validate().is_err());

    // Empty pattern should fail
    config.formatter.format = String::new();
    assert!(config.validate().is_err());

    // Unknown default locale should fail
    config.formatter.format = DEFAULT_DATE_FORMAT.to_string();
    config.formatter.default_locale = "klingon".to_string();
    assert!(config.validate().is_err());

    // Bad offset should fail
    config.formatter.default_locale = "de".to_string();
    config.formatter.utc_offset = Some("noon".to_string());
    assert!(config.validate().is_err());

    // Bad log level should fail
    config.formatter.utc_offset = Some("+02:00".to_string());
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_customization_validation() {
    let mut config = Config::default();
    config
        .locales
        .insert("de".to_string(), LocaleCustomization::with_format("%d.%m.%Y"));
    assert!(config.validate().is_ok());

    config
        .locales
        .insert("x-pirate".to_string(), LocaleCustomization::with_base("klingon"));
    assert!(config.validate().is_err());

    config
        .locales
        .insert("x-pirate".to_string(), LocaleCustomization::with_format("%Q"));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_locale = \"en_US\""));
    assert!(toml_str.contains("[formatter]"));
    assert!(!toml_str.contains("utc_offset"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[formatter]
default_locale = "de"

[locales.fr]
format = "%A %-d %B %Y"

[locales.x-pirate]
base = "en_GB"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert!(config.validate().is_ok());

    // Check that specified values are used
    assert_eq!(config.formatter.default_locale, "de");
    assert!(config.logging.enabled);
    assert_eq!(config.locales["fr"].format.as_deref(), Some("%A %-d %B %Y"));
    assert_eq!(config.locales["x-pirate"].base.as_deref(), Some("en_GB"));
    assert!(config.locales["x-pirate"].format.is_none());

    // Check that unspecified values use defaults
    assert_eq!(config.formatter.format, DEFAULT_DATE_FORMAT); // default value
    assert_eq!(config.logging.level, "info"); // default value
    assert!(config.logging.file.is_none()); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.formatter.format, default_config.formatter.format);
    assert_eq!(config.formatter.default_locale, default_config.formatter.default_locale);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_formatter_from_config() {
    let config: Config = toml::from_str(
        r#"
[formatter]
format = "%A"
default_locale = "fr"
utc_offset = "+01:00"

[locales.de]
format = "%d.%m.%Y %H:%M"
"#,
    )
    .unwrap();

    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let formatter = DateFormatter::from_config(&config).unwrap();
    assert_eq!(formatter.format_instant(instant, "de"), "15.01.2024 11:30");
    assert_eq!(formatter.format_instant(instant, "en"), "Monday");
    assert_eq!(formatter.format_instant(instant, "klingon"), "lundi");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = std::env::temp_dir().join("datestamp_test_invalid_config");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");

    std::fs::write(&config_path, "[formatter]\nformat = \"%Q\"\n").unwrap();
    assert!(Config::load_from_file(&config_path).is_err());

    std::fs::write(&config_path, "[formatter\n").unwrap();
    assert!(Config::load_from_file(&config_path).is_err());

    assert!(Config::load_from_file(temp_dir.join("missing.toml")).is_err());

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("datestamp_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# datestamp Configuration File"));
    assert!(content.contains("default_locale = \"en_US\""));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.formatter.format, DEFAULT_DATE_FORMAT);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generated_config_hints_are_valid_when_uncommented() {
    let temp_dir = std::env::temp_dir().join("datestamp_test_config_hints");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let config_path = temp_dir.join("config.toml");
    Config::generate_default_config(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# utc_offset = \"+01:00\""));
    assert!(content.contains("# file = "));
    assert!(content.contains("# [locales.de]"));

    let uncommented = content
        .replace("# utc_offset = ", "utc_offset = ")
        .replace("# file = ", "file = ")
        .replace("# [locales.de]", "[locales.de]")
        .replace("# format = ", "format = ");
    let config: Config = toml::from_str(&uncommented).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.formatter.utc_offset.as_deref(), Some("+01:00"));
    assert!(config.logging.file.is_some());
    assert_eq!(config.locales["de"].format.as_deref(), Some("%A, %-d. %B %Y %H:%M"));

    let _ = std::fs::remove_dir_all(&temp_dir);
}
