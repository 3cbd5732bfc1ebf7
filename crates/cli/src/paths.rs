//! State and config paths (~/.config/plansmith/)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

const APP_DIR: &str = "plansmith";
const SESSION_ID_FILENAME: &str = "session_id";
const CONFIG_FILENAME: &str = "config.toml";

/// Returns the plansmith state directory, creating it if needed.
///
/// `PLANSMITH_STATE_DIR` overrides the default `~/.config/plansmith/`.
pub fn state_dir() -> Option<PathBuf> {
    let dir = match std::env::var("PLANSMITH_STATE_DIR") {
        Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::config_dir()?.join(APP_DIR),
    };
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

pub fn config_path() -> Option<PathBuf> {
    Some(state_dir()?.join(CONFIG_FILENAME))
}

/// Loads the session id, minting one on first use. The id lives next to
/// the session window and goes away with `plansmith reset`.
pub fn load_or_create_session_id(dir: &Path) -> Result<String> {
    let path = dir.join(SESSION_ID_FILENAME);
    if let Ok(content) = std::fs::read_to_string(&path) {
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    let id = new_session_id();
    std::fs::write(&path, &id).with_context(|| format!("write {}", path.display()))?;
    Ok(id)
}

pub fn clear_session_id(dir: &Path) {
    let _ = std::fs::remove_file(dir.join(SESSION_ID_FILENAME));
}

/// `session_<epoch-millis>_<hash suffix>`
fn new_session_id() -> String {
    let millis = now_epoch_millis();
    let seed = format!("{}:{}", millis, std::process::id());
    let hash = Sha256::digest(seed.as_bytes());
    format!(
        "session_{}_{}",
        millis,
        plansmith_core::fingerprint::hex_encode(&hash[..4])
    )
}

pub fn now_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub fn now_epoch_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
