//! In-memory usage store

use std::sync::RwLock;

use anyhow::Result;

use crate::ledger::UsageLedger;
use crate::session::SessionWindow;

use super::UsageStore;

#[derive(Default)]
struct Records {
    ledger: Option<UsageLedger>,
    window: SessionWindow,
    activity: Option<u64>,
}

/// In-memory usage store backed by an `RwLock`
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageStore for MemoryStore {
    fn load_ledger(&self) -> Result<Option<UsageLedger>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        Ok(records.ledger.clone())
    }

    fn save_ledger(&self, ledger: &UsageLedger) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        records.ledger = Some(ledger.clone());
        Ok(())
    }

    fn load_window(&self) -> Result<SessionWindow> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        Ok(records.window.clone())
    }

    fn save_window(&self, window: &SessionWindow) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        records.window = window.clone();
        Ok(())
    }

    fn last_activity(&self) -> Result<Option<u64>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        Ok(records.activity)
    }

    fn touch_activity(&self, now: u64) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        records.activity = Some(now);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        *records = Records::default();
        Ok(())
    }
}
