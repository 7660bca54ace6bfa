use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use datestamp::formatter::{parse_offset, validate_pattern};
use datestamp::DateFormatter;

pub fn build_cli() -> Command {
    Command::new("datestamp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the current date and time formatted for a locale.")
        .arg(
            Arg::new("locale")
                .value_name("LOCALE")
                .help("Locale identifier such as en, de or pt-BR (default: configured default locale)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("PATTERN")
                .help("strftime-style pattern overriding the configured format")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_name("+HH:MM")
                .allow_hyphen_values(true)
                .help("Render in a fixed UTC offset instead of the local time zone")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("PATH")
                .num_args(0..=1)
                .default_missing_value("")
                .help("Write a default configuration file and exit (default: XDG config path)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

/// Apply `--format` and `--offset` on top of the configured formatter.
///
/// Both are validated like their config file counterparts.
pub fn apply_overrides(mut formatter: DateFormatter, matches: &ArgMatches) -> Result<DateFormatter> {
    if let Some(pattern) = matches.get_one::<String>("format") {
        validate_pattern(pattern).context("Invalid --format")?;
        formatter = formatter.with_pattern(pattern.as_str());
    }
    if let Some(offset) = matches.get_one::<String>("offset") {
        formatter = formatter.with_offset(parse_offset(offset).context("Invalid --offset")?);
    }
    Ok(formatter)
}
