//! Generation event log — appends JSON lines to `events.jsonl`
//!
//! Best-effort telemetry: commands record what happened to the quota, and
//! `plansmith log` reads it back. A write failure never blocks or fails
//! the command that tried to record it.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const EVENTS_FILENAME: &str = "events.jsonl";

#[derive(Debug, Serialize, Deserialize)]
pub struct UsageEvent {
    pub timestamp: u64,
    pub event: String,
    pub session_id: String,
    pub device_fingerprint: String,
    pub tier: String,
    pub tokens_remaining: u32,
    pub weekly_used: u32,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub detail: serde_json::Value,
}

/// Appends one event to the log.
pub fn append(dir: &Path, event: &UsageEvent) -> Result<()> {
    let path = dir.join(EVENTS_FILENAME);
    let mut line = serde_json::to_string(event)?;
    line.push('\n');
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open event log {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("append to {}", path.display()))?;
    Ok(())
}

/// The last `limit` events, oldest first. Unparseable lines are skipped.
pub fn list(dir: &Path, limit: usize) -> Result<Vec<UsageEvent>> {
    let path = dir.join(EVENTS_FILENAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };
    let events: Vec<UsageEvent> = content
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();
    let skip = events.len().saturating_sub(limit);
    Ok(events.into_iter().skip(skip).collect())
}
