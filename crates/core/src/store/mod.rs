//! Usage storage abstraction layer
//!
//! Provides a `UsageStore` trait that decouples the policy engine from the
//! underlying persistence. Two implementations:
//! - `MemoryStore`: in-memory, for tests and embedding (always available)
//! - `FileStore`: JSON files in a caller-supplied directory
//!
//! The ledger record is durable per-device state; the session window and
//! the activity stamp are small companion records. A server-side port
//! would put an authenticated identity behind this same trait.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;

use crate::ledger::UsageLedger;
use crate::session::SessionWindow;

/// Abstract persistence for the usage-control records.
///
/// Methods return owned values so callers don't hold locks. A missing
/// ledger reads as `None` (first visit); a missing window reads as empty.
pub trait UsageStore: Send + Sync {
    fn load_ledger(&self) -> Result<Option<UsageLedger>>;
    fn save_ledger(&self, ledger: &UsageLedger) -> Result<()>;

    fn load_window(&self) -> Result<SessionWindow>;
    fn save_window(&self, window: &SessionWindow) -> Result<()>;

    /// The single global last-activity stamp used by the device guard.
    fn last_activity(&self) -> Result<Option<u64>>;
    fn touch_activity(&self, now: u64) -> Result<()>;

    /// Diagnostic reset: removes the ledger, the window, and the activity
    /// stamp. The caller reinitializes a fresh ledger afterwards.
    fn clear(&self) -> Result<()>;
}

impl<S: UsageStore + ?Sized> UsageStore for std::sync::Arc<S> {
    fn load_ledger(&self) -> Result<Option<UsageLedger>> {
        (**self).load_ledger()
    }

    fn save_ledger(&self, ledger: &UsageLedger) -> Result<()> {
        (**self).save_ledger(ledger)
    }

    fn load_window(&self) -> Result<SessionWindow> {
        (**self).load_window()
    }

    fn save_window(&self, window: &SessionWindow) -> Result<()> {
        (**self).save_window(window)
    }

    fn last_activity(&self) -> Result<Option<u64>> {
        (**self).last_activity()
    }

    fn touch_activity(&self, now: u64) -> Result<()> {
        (**self).touch_activity(now)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
