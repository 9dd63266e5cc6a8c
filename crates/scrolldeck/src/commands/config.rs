use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default_from(&path);
    let settings = config.nav_settings();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("{}", "defaults:".bold());
    println!("  theme: {}", config.theme().unwrap_or("light"));
    println!("{}", "navigation:".bold());
    println!(
        "  scroll_duration_ms: {}",
        settings.scroll_duration.as_millis()
    );
    println!("  trigger_start: {}", settings.band.start());
    println!("  trigger_end: {}", settings.band.end());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    // A malformed file is reported rather than overwritten.
    let mut config = Config::load_if_exists(&Config::path()?)?;
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
