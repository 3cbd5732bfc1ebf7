//! `plansmith log` — list recent generation events

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::format_date;
use crate::event_log;
use crate::paths;

pub fn run(limit: usize) -> Result<()> {
    let dir = paths::state_dir().context("could not determine the plansmith state directory")?;
    let events = event_log::list(&dir, limit)?;

    if events.is_empty() {
        println!(
            "  {}",
            "No events yet. Run `plansmith generate` to create some.".dimmed()
        );
        return Ok(());
    }

    println!(
        "  {}",
        format!(
            "{:<12} {:<22} {:<12} {:<8} {}",
            "Date", "Event", "Tier", "Tokens", "Weekly"
        )
        .bold()
    );
    println!("  {}", "\u{2500}".repeat(64).dimmed());

    for event in &events {
        println!(
            "  {:<12} {:<22} {:<12} {:<8} {}",
            format_date(event.timestamp),
            event.event,
            event.tier,
            event.tokens_remaining,
            event.weekly_used,
        );
    }

    println!();
    Ok(())
}
