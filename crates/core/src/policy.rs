//! Usage policy engine
//!
//! Composes the session rate limiter, the device-binding guard, and the
//! quota ledger into a single admission decision per generation attempt,
//! then hands the request to the completion service and settles the
//! consumed token against the outcome. Session-local checks run first and
//! the external call runs last, so a rejected attempt costs neither quota
//! nor a network round trip.

use std::sync::{Mutex, MutexGuard};

use crate::completion::{CompletionService, GenerationRequest};
use crate::error::UsageError;
use crate::guard;
use crate::ledger::UsageLedger;
use crate::store::UsageStore;
use crate::tier::Tier;

pub struct PolicyEngine<S, C> {
    store: S,
    completion: C,
    fingerprint: String,
    gate: Mutex<()>,
}

impl<S: UsageStore, C: CompletionService> PolicyEngine<S, C> {
    pub fn new(store: S, completion: C, fingerprint: impl Into<String>) -> Self {
        Self {
            store,
            completion,
            fingerprint: fingerprint.into(),
            gate: Mutex::new(()),
        }
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Runs one generation attempt at `now`.
    ///
    /// Checks short-circuit in fixed order: session window, device guard,
    /// period rollover, ledger consume, completion call. The session
    /// window records the attempt as soon as it is admitted there, but the
    /// ledger only moves once every admission check has passed — and moves
    /// back if the completion service fails, so a backend outage never
    /// permanently costs the user a token.
    ///
    /// The whole sequence is serialized on an internal lock; concurrent
    /// callers cannot interleave load/save pairs and lose updates.
    pub fn attempt_generation(
        &self,
        request: &GenerationRequest,
        now: u64,
    ) -> Result<String, UsageError> {
        let _gate = self.lock_gate()?;

        let mut window = self.store.load_window()?;
        window.check_and_record(now)?;
        self.store.save_window(&window)?;

        let existing = self.store.load_ledger()?;
        if let Some(ledger) = &existing {
            guard::check_device_access(
                &ledger.device_fingerprint,
                &self.fingerprint,
                self.store.last_activity()?,
                now,
            )?;
        }
        self.store.touch_activity(now)?;

        let mut ledger =
            existing.unwrap_or_else(|| UsageLedger::new(self.fingerprint.clone(), now));
        ledger.rebind(&self.fingerprint);
        ledger.rollover_if_due(now);

        let ticket = match ledger.consume() {
            Ok(ticket) => ticket,
            Err(err) => {
                // Rollover and rebinding stick even when the caps reject.
                self.store.save_ledger(&ledger)?;
                return Err(err);
            }
        };
        self.store.save_ledger(&ledger)?;

        match self.completion.generate(request) {
            Ok(response) => Ok(response.content),
            Err(err) => {
                ledger.refund(ticket);
                self.store.save_ledger(&ledger)?;
                Err(UsageError::CompletionFailed(err))
            }
        }
    }

    /// Current ledger state for display: initializes on first use and
    /// applies any due rollover, so a stale period never shows exhausted
    /// counters that a real attempt would have refreshed.
    pub fn usage_snapshot(&self, now: u64) -> Result<UsageLedger, UsageError> {
        let _gate = self.lock_gate()?;

        let mut ledger = match self.store.load_ledger()? {
            Some(ledger) => ledger,
            None => {
                let fresh = UsageLedger::new(self.fingerprint.clone(), now);
                self.store.save_ledger(&fresh)?;
                return Ok(fresh);
            }
        };
        if ledger.rollover_if_due(now) {
            self.store.save_ledger(&ledger)?;
        }
        Ok(ledger)
    }

    /// Switches the subscription tier, effective immediately.
    pub fn upgrade(&self, tier: Tier, now: u64) -> Result<UsageLedger, UsageError> {
        let _gate = self.lock_gate()?;

        let mut ledger = self
            .store
            .load_ledger()?
            .unwrap_or_else(|| UsageLedger::new(self.fingerprint.clone(), now));
        ledger.upgrade(tier);
        self.store.save_ledger(&ledger)?;
        Ok(ledger)
    }

    /// Diagnostic reset: wipes all records and starts over at the free
    /// tier, bound to the caller's fingerprint.
    pub fn reset(&self, now: u64) -> Result<UsageLedger, UsageError> {
        let _gate = self.lock_gate()?;

        self.store.clear()?;
        let fresh = UsageLedger::new(self.fingerprint.clone(), now);
        self.store.save_ledger(&fresh)?;
        Ok(fresh)
    }

    fn lock_gate(&self) -> Result<MutexGuard<'_, ()>, UsageError> {
        self.gate
            .lock()
            .map_err(|e| UsageError::Store(anyhow::anyhow!("engine lock poisoned: {e}")))
    }
}
