//! Per-device quota ledger
//!
//! One ledger exists per persisted store. It tracks two separate weekly
//! budgets — generation tokens and completed plans — plus the subscription
//! tier that determines both caps, and the fingerprint of the device the
//! ledger is bound to. All mutation happens through the methods here;
//! persisting the result is the caller's job via [`crate::UsageStore`].

use serde::{Deserialize, Serialize};

use crate::error::UsageError;
use crate::tier::Tier;

/// One week, in seconds. Period rollover fires once this much time has
/// elapsed since `last_reset_epoch`.
pub const WEEK_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLedger {
    pub tokens_used: u32,
    pub tokens_available: u32,
    pub weekly_used: u32,
    pub weekly_limit: u32,
    pub last_reset_epoch: u64,
    pub device_fingerprint: String,
    pub subscription: Tier,
}

/// Proof of a successful [`UsageLedger::consume`]. Refunds are only
/// accepted against an outstanding ticket, and taking the ticket by value
/// means a single consume can be reversed at most once.
#[derive(Debug)]
#[must_use = "an unconsumed ticket means a generation was charged but never settled"]
pub struct ConsumeTicket {
    _outstanding: (),
}

impl UsageLedger {
    /// Fresh free-tier ledger bound to `fingerprint`, with the period
    /// starting at `now`.
    pub fn new(fingerprint: impl Into<String>, now: u64) -> Self {
        let limits = Tier::Free.limits();
        Self {
            tokens_used: 0,
            tokens_available: limits.tokens_per_week,
            weekly_used: 0,
            weekly_limit: limits.plans_per_week,
            last_reset_epoch: now,
            device_fingerprint: fingerprint.into(),
            subscription: Tier::Free,
        }
    }

    /// Rolls the weekly period over if at least [`WEEK_SECS`] have elapsed.
    ///
    /// Resets `weekly_used`, refreshes `tokens_available` from the tier
    /// table, and restarts the period clock. `tokens_used` is left alone:
    /// it only becomes meaningful again relative to the refreshed
    /// availability. Returns whether a rollover happened; calling twice in
    /// the same period is a no-op the second time.
    pub fn rollover_if_due(&mut self, now: u64) -> bool {
        if now.saturating_sub(self.last_reset_epoch) < WEEK_SECS {
            return false;
        }
        self.weekly_used = 0;
        self.tokens_available = self.subscription.limits().tokens_per_week;
        self.last_reset_epoch = now;
        true
    }

    /// Charges one token and one plan against the weekly budgets.
    ///
    /// The plan cap is evaluated first, so a ledger that is out of both
    /// reports `PlanLimit` — "wait for the weekly reset" — rather than the
    /// token message. Counters move only on success.
    pub fn consume(&mut self) -> Result<ConsumeTicket, UsageError> {
        if self.weekly_used >= self.weekly_limit {
            return Err(UsageError::PlanLimit {
                tier: self.subscription,
            });
        }
        if self.tokens_used >= self.tokens_available {
            return Err(UsageError::TokenLimit {
                tier: self.subscription,
            });
        }
        self.tokens_used += 1;
        self.weekly_used += 1;
        Ok(ConsumeTicket { _outstanding: () })
    }

    /// Reverses one consume. Floored at zero as a belt against ledgers
    /// persisted by older builds; the ticket is what actually prevents a
    /// double refund.
    pub fn refund(&mut self, ticket: ConsumeTicket) {
        let ConsumeTicket { _outstanding } = ticket;
        self.tokens_used = self.tokens_used.saturating_sub(1);
        self.weekly_used = self.weekly_used.saturating_sub(1);
    }

    /// Switches the subscription tier, effective immediately: both caps
    /// come from the new tier's table and both usage counters restart at
    /// zero regardless of prior consumption.
    pub fn upgrade(&mut self, tier: Tier) {
        let limits = tier.limits();
        self.subscription = tier;
        self.tokens_available = limits.tokens_per_week;
        self.weekly_limit = limits.plans_per_week;
        self.tokens_used = 0;
        self.weekly_used = 0;
    }

    /// Rebinds the ledger to a new device fingerprint.
    pub fn rebind(&mut self, fingerprint: &str) {
        self.device_fingerprint = fingerprint.to_string();
    }

    pub fn tokens_remaining(&self) -> u32 {
        self.tokens_available.saturating_sub(self.tokens_used)
    }

    /// When the current period ends and the weekly counters refresh.
    pub fn next_reset_epoch(&self) -> u64 {
        self.last_reset_epoch + WEEK_SECS
    }
}
