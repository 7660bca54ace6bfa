mod cli;

use anyhow::{Context, Result};
use datestamp::config::Config;
use datestamp::{logger, DateFormatter};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    if let Some(path) = matches.get_one::<String>("generate-config") {
        let path = if path.is_empty() {
            Config::get_default_config_path()?
        } else {
            PathBuf::from(path)
        };
        return Config::generate_default_config(&path);
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(&config.logging, matches.get_flag("debug")).context("Failed to initialize logging")?;

    let formatter = DateFormatter::from_config(&config).context("Failed to build formatter from config")?;
    let formatter = cli::apply_overrides(formatter, &matches)?;

    let locale = matches
        .get_one::<String>("locale")
        .map(String::as_str)
        .unwrap_or(config.formatter.default_locale.as_str());
    log::debug!("Formatting current date for locale '{}' with {:?}", locale, formatter);

    println!("{}", formatter.current_date_time(locale));
    Ok(())
}
