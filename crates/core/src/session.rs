//! Per-session sliding-window rate limiter
//!
//! Independent of the quota ledger: even a premium device gets at most
//! [`MAX_PER_WINDOW`] generation attempts per trailing hour within one
//! session. The window is a plain timestamp list, trimmed on every check.

use serde::{Deserialize, Serialize};

use crate::error::UsageError;

/// Trailing window length in seconds.
pub const WINDOW_SECS: u64 = 60 * 60;

/// Maximum requests allowed inside the window.
pub const MAX_PER_WINDOW: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub requests: Vec<u64>,
}

impl SessionWindow {
    /// Admits or rejects a request at `now`.
    ///
    /// Entries older than exactly one hour fall out of the window first
    /// (an entry aged precisely [`WINDOW_SECS`] is already outside). If
    /// the surviving count has reached the cap, the request is rejected
    /// and `now` is not recorded; otherwise `now` joins the list. The
    /// caller persists the trimmed-and-appended window on success only.
    pub fn check_and_record(&mut self, now: u64) -> Result<(), UsageError> {
        self.requests
            .retain(|&t| now.saturating_sub(t) < WINDOW_SECS);
        if self.requests.len() >= MAX_PER_WINDOW {
            return Err(UsageError::SessionRateLimit);
        }
        self.requests.push(now);
        Ok(())
    }

    /// Requests still inside the trailing window at `now`.
    pub fn recent_count(&self, now: u64) -> usize {
        self.requests
            .iter()
            .filter(|&&t| now.saturating_sub(t) < WINDOW_SECS)
            .count()
    }
}
