//! Initialize config.toml in the state directory

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::PlansmithConfig;
use crate::paths;

pub fn run() -> Result<()> {
    let path = paths::config_path().context("could not determine the plansmith config path")?;

    if path.exists() {
        eprintln!(
            "  {} config.toml already exists at {}",
            "\u{26a1}".yellow(),
            path.display()
        );
        return Ok(());
    }

    PlansmithConfig::default().save(&path)?;

    eprintln!("  {} Created {}", "\u{2713}".green(), path.display());
    eprintln!();
    eprintln!("  You can now customize the service URL and run:");
    eprintln!(
        "    {}",
        "plansmith generate --grade-level \"3rd Grade\" --subject Science --topic \"Urban Ecology\""
            .bold()
    );
    Ok(())
}
