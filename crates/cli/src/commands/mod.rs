//! CLI commands

pub mod generate;
pub mod init;
pub mod log;
pub mod reset;
pub mod status;
pub mod templates;
pub mod upgrade;

use std::path::PathBuf;

use anyhow::{Context, Result};
use plansmith_core::{fingerprint, FileStore, PolicyEngine, UsageLedger};

use crate::client::HttpCompletionClient;
use crate::config::PlansmithConfig;
use crate::event_log::{self, UsageEvent};
use crate::paths;

pub(crate) type Engine = PolicyEngine<FileStore, HttpCompletionClient>;

/// Builds the file-backed engine every command shares, fingerprinted for
/// this invocation.
pub(crate) fn build_engine(config: &PlansmithConfig, now: u64) -> Result<(Engine, PathBuf)> {
    let dir = paths::state_dir().context("could not determine the plansmith state directory")?;
    let store = FileStore::new(&dir);
    let client = HttpCompletionClient::from_config(&config.service);
    let fp = fingerprint::generate(now);
    Ok((PolicyEngine::new(store, client, fp), dir))
}

/// Records a usage event; telemetry failures are swallowed.
pub(crate) fn record_event(
    dir: &std::path::Path,
    session_id: &str,
    ledger: &UsageLedger,
    event: &str,
    detail: serde_json::Value,
) {
    let _ = event_log::append(
        dir,
        &UsageEvent {
            timestamp: paths::now_epoch(),
            event: event.to_string(),
            session_id: session_id.to_string(),
            device_fingerprint: ledger.device_fingerprint.clone(),
            tier: ledger.subscription.to_string(),
            tokens_remaining: ledger.tokens_remaining(),
            weekly_used: ledger.weekly_used,
            detail,
        },
    );
}

/// `YYYY-MM-DD` from an epoch timestamp, without pulling in a date crate.
pub(crate) fn format_date(ts: u64) -> String {
    let days = ts / 86_400;
    let (year, month, day) = days_to_ymd(days);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Convert days since Unix epoch to (year, month, day).
fn days_to_ymd(mut days: u64) -> (u64, u64, u64) {
    let mut year = 1970u64;
    loop {
        let days_in_year = if is_leap(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }
    let month_lengths = [
        31,
        if is_leap(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 1u64;
    for len in month_lengths {
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    (year, month, days + 1)
}

fn is_leap(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
