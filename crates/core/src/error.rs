//! Error taxonomy for the usage-control subsystem
//!
//! Every rejection here is recoverable and user-facing; the policy engine
//! never panics and never leaves quota consumed for a rejected attempt.

use crate::completion::CompletionError;
use crate::tier::Tier;

#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Too many attempts in the trailing hour for this session.
    #[error("Too many requests from this session. Please wait an hour before generating more lesson plans.")]
    SessionRateLimit,

    /// A second device was active on this ledger within the last minute.
    #[error("Account sharing detected. Each account is limited to one device. Please upgrade for multi-device access.")]
    DeviceSharingSuspected,

    /// Weekly plan-count cap reached.
    #[error("Weekly limit reached. {}.", plan_limit_hint(.tier))]
    PlanLimit { tier: Tier },

    /// Token cap reached.
    #[error("{}", token_limit_hint(.tier))]
    TokenLimit { tier: Tier },

    /// Downstream completion call failed; the consumed token was refunded.
    #[error("completion service error: {0}")]
    CompletionFailed(#[from] CompletionError),

    #[error("usage store error: {0}")]
    Store(anyhow::Error),
}

impl From<anyhow::Error> for UsageError {
    fn from(err: anyhow::Error) -> Self {
        UsageError::Store(err)
    }
}

impl UsageError {
    /// Whether the CLI should route this rejection to the upgrade pitch
    /// rather than a "wait for reset" message. Paid tiers are never pitched.
    pub fn upgrade_suggested(&self) -> bool {
        match self {
            UsageError::DeviceSharingSuspected => true,
            UsageError::PlanLimit { tier } | UsageError::TokenLimit { tier } => {
                *tier == Tier::Free
            }
            _ => false,
        }
    }
}

fn plan_limit_hint(tier: &Tier) -> &'static str {
    match tier {
        Tier::Free => "Upgrade for more lesson plans",
        _ => "Limit resets next week",
    }
}

fn token_limit_hint(tier: &Tier) -> &'static str {
    match tier {
        Tier::Free => "You've used your free lesson plans. Upgrade for unlimited access!",
        _ => "Token limit reached. Tokens refresh weekly.",
    }
}
