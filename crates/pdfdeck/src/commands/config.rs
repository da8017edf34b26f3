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
    let config = Config::load_or_default();
    let yaml = serde_yaml::to_string(&config)?;
    if let Ok(path) = Config::path() {
        eprintln!("{} {}", "Config file:".dimmed(), path.display());
    }
    print!("{yaml}");
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    eprintln!("{} {key} = {value} ({})", "Saved".green(), path.display());
    Ok(())
}
