//! Reset command — diagnostic wipe of all usage state

use anyhow::Result;
use colored::Colorize;

use crate::commands::{build_engine, record_event};
use crate::config::PlansmithConfig;
use crate::paths;

pub fn run() -> Result<()> {
    let config = PlansmithConfig::load()?;
    let now = paths::now_epoch();
    let (engine, state_dir) = build_engine(&config, now)?;

    let ledger = engine.reset(now)?;
    paths::clear_session_id(&state_dir);

    // A fresh session id is minted here so the reset event is attributable.
    let session_id = paths::load_or_create_session_id(&state_dir)?;
    record_event(
        &state_dir,
        &session_id,
        &ledger,
        "reset",
        serde_json::Value::Null,
    );

    eprintln!(
        "  {} Usage data reset. {} tokens available at the {} tier.",
        "\u{2713}".green(),
        ledger.tokens_available,
        ledger.subscription.to_string().cyan()
    );
    Ok(())
}
