//! Subscription tiers and their weekly limits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Individual,
    Premium,
}

/// Weekly caps for one tier. Tokens and plans are separate budgets:
/// a token is one unit of generation capacity, a plan is one completed
/// generation counted against the weekly plan cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLimits {
    pub tokens_per_week: u32,
    pub plans_per_week: u32,
}

impl Tier {
    pub fn limits(self) -> TierLimits {
        match self {
            Tier::Free => TierLimits {
                tokens_per_week: 3,
                plans_per_week: 2,
            },
            Tier::Individual => TierLimits {
                tokens_per_week: 50,
                plans_per_week: 25,
            },
            Tier::Premium => TierLimits {
                tokens_per_week: 999,
                plans_per_week: 999,
            },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "Free"),
            Tier::Individual => write!(f, "Individual"),
            Tier::Premium => write!(f, "Premium"),
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "individual" => Ok(Tier::Individual),
            "premium" => Ok(Tier::Premium),
            other => Err(format!(
                "unknown tier '{other}' (expected free, individual, or premium)"
            )),
        }
    }
}
