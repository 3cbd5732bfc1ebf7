//! Status command — tier and remaining quota

use anyhow::Result;
use colored::Colorize;
use plansmith_core::UsageLedger;

use crate::commands::{build_engine, format_date};
use crate::config::PlansmithConfig;
use crate::paths;

pub fn run() -> Result<()> {
    let config = PlansmithConfig::load()?;
    let now = paths::now_epoch();
    let (engine, _state_dir) = build_engine(&config, now)?;

    let ledger = engine.usage_snapshot(now)?;
    print_usage_info(&ledger);
    Ok(())
}

pub(crate) fn print_usage_info(ledger: &UsageLedger) {
    eprintln!(
        "  {}: {}",
        "Tier".bold(),
        ledger.subscription.to_string().cyan()
    );
    eprintln!(
        "  {}: {}/{}",
        "Tokens".bold(),
        ledger.tokens_remaining(),
        ledger.tokens_available
    );
    eprintln!(
        "  {}: {}/{}",
        "Weekly plans".bold(),
        ledger.weekly_used,
        ledger.weekly_limit
    );
    eprintln!(
        "  {}: {}",
        "Resets".bold(),
        format_date(ledger.next_reset_epoch()).dimmed()
    );
    eprintln!();
}
