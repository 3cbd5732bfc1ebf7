//! Upgrade command — switch subscription tier, effective immediately

use anyhow::Result;
use colored::Colorize;
use plansmith_core::Tier;

use crate::commands::{build_engine, record_event, status};
use crate::config::PlansmithConfig;
use crate::paths;

pub fn run(tier_arg: &str) -> Result<()> {
    let tier: Tier = tier_arg.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let config = PlansmithConfig::load()?;
    let now = paths::now_epoch();
    let (engine, state_dir) = build_engine(&config, now)?;

    let previous = engine.usage_snapshot(now)?.subscription;
    let ledger = engine.upgrade(tier, now)?;

    let session_id = paths::load_or_create_session_id(&state_dir)?;
    record_event(
        &state_dir,
        &session_id,
        &ledger,
        "upgraded",
        serde_json::json!({
            "new_level": tier.to_string(),
            "previous_level": previous.to_string(),
        }),
    );

    eprintln!(
        "  {} Upgrade successful! You now have {} lesson plans per week ({} tokens).",
        "\u{2713}".green(),
        ledger.weekly_limit,
        ledger.tokens_available
    );
    eprintln!();
    status::print_usage_info(&ledger);
    Ok(())
}
