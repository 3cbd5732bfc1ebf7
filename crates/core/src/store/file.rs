//! File-backed usage store
//!
//! Three small files in one directory: `usage.json` (the ledger),
//! `session.json` (the sliding window), and `activity` (a bare epoch
//! stamp). Unreadable or corrupt records read as absent rather than
//! erroring, so a damaged state dir degrades to a fresh start instead of
//! locking the user out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ledger::UsageLedger;
use crate::session::SessionWindow;

use super::UsageStore;

const LEDGER_FILENAME: &str = "usage.json";
const WINDOW_FILENAME: &str = "session.json";
const ACTIVITY_FILENAME: &str = "activity";

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create state dir {}", self.dir.display()))
    }

    fn write_json<T: serde::Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.dir.join(filename);
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, json).with_context(|| format!("write {}", path.display()))
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, filename: &str) -> Option<T> {
        let content = std::fs::read_to_string(self.dir.join(filename)).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl UsageStore for FileStore {
    fn load_ledger(&self) -> Result<Option<UsageLedger>> {
        Ok(self.read_json(LEDGER_FILENAME))
    }

    fn save_ledger(&self, ledger: &UsageLedger) -> Result<()> {
        self.write_json(LEDGER_FILENAME, ledger)
    }

    fn load_window(&self) -> Result<SessionWindow> {
        Ok(self.read_json(WINDOW_FILENAME).unwrap_or_default())
    }

    fn save_window(&self, window: &SessionWindow) -> Result<()> {
        self.write_json(WINDOW_FILENAME, window)
    }

    fn last_activity(&self) -> Result<Option<u64>> {
        let content = match std::fs::read_to_string(self.dir.join(ACTIVITY_FILENAME)) {
            Ok(c) => c,
            Err(_) => return Ok(None),
        };
        Ok(content.trim().parse::<u64>().ok())
    }

    fn touch_activity(&self, now: u64) -> Result<()> {
        self.ensure_dir()?;
        let path = self.dir.join(ACTIVITY_FILENAME);
        std::fs::write(&path, now.to_string())
            .with_context(|| format!("write {}", path.display()))
    }

    fn clear(&self) -> Result<()> {
        for name in [LEDGER_FILENAME, WINDOW_FILENAME, ACTIVITY_FILENAME] {
            let _ = std::fs::remove_file(self.dir.join(name));
        }
        Ok(())
    }
}
