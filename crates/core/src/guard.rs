//! Device-binding guard
//!
//! Heuristic detection of one ledger being shared across devices: a caller
//! whose fingerprint identifies a different device than the ledger's
//! binding, arriving while the previous device was active within the last
//! minute, is treated as concurrent sharing. It cannot tell a second
//! device of the same user from a shared account; the mitigation offered
//! upstream is an upgrade, not a hard block.

use crate::error::UsageError;
use crate::fingerprint;

/// How recently the last activity must be for a differing fingerprint to
/// count as concurrent use.
pub const ACTIVITY_WINDOW_SECS: u64 = 60;

/// Checks whether the caller may act on a ledger bound to `stored_fp`.
///
/// `last_activity` is the single global activity stamp, not tracked per
/// fingerprint. On allow, the caller is expected to stamp activity at
/// `now` and rebind the ledger to `current_fp`. First use (no ledger, so
/// no stored fingerprint) never reaches this check.
pub fn check_device_access(
    stored_fp: &str,
    current_fp: &str,
    last_activity: Option<u64>,
    now: u64,
) -> Result<(), UsageError> {
    if fingerprint::same_device(stored_fp, current_fp) {
        return Ok(());
    }
    if let Some(last) = last_activity {
        if now.saturating_sub(last) < ACTIVITY_WINDOW_SECS {
            return Err(UsageError::DeviceSharingSuspected);
        }
    }
    Ok(())
}
