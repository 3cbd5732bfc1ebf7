use plansmith_core::ledger::WEEK_SECS;
use plansmith_core::{Tier, UsageError, UsageLedger};

fn free_ledger(now: u64) -> UsageLedger {
    UsageLedger::new("fp_abc_1", now)
}

// --- new ---

#[test]
fn new_ledger_is_free_tier_with_zero_usage() {
    let ledger = free_ledger(1_000);
    assert_eq!(ledger.subscription, Tier::Free);
    assert_eq!(ledger.tokens_used, 0);
    assert_eq!(ledger.tokens_available, 3);
    assert_eq!(ledger.weekly_used, 0);
    assert_eq!(ledger.weekly_limit, 2);
    assert_eq!(ledger.last_reset_epoch, 1_000);
    assert_eq!(ledger.device_fingerprint, "fp_abc_1");
}

// --- consume ---

#[test]
fn consume_increments_both_counters() {
    let mut ledger = free_ledger(0);
    let _ticket = ledger.consume().unwrap();
    assert_eq!(ledger.tokens_used, 1);
    assert_eq!(ledger.weekly_used, 1);
}

#[test]
fn consume_never_exceeds_caps() {
    // Arbitrary sequences: drive consume to exhaustion on every tier and
    // check the invariants hold throughout.
    for tier in [Tier::Free, Tier::Individual, Tier::Premium] {
        let mut ledger = free_ledger(0);
        ledger.upgrade(tier);
        loop {
            match ledger.consume() {
                Ok(_ticket) => {
                    assert!(ledger.tokens_used <= ledger.tokens_available);
                    assert!(ledger.weekly_used <= ledger.weekly_limit);
                }
                Err(_) => break,
            }
        }
        // A rejected consume must not have moved anything.
        let before = ledger.clone();
        assert!(ledger.consume().is_err());
        assert_eq!(ledger, before);
    }
}

#[test]
fn free_tier_hits_plan_limit_before_token_limit() {
    // tokens_available=3 but weekly_limit=2: the third attempt fails on
    // the plan cap even though a token remains.
    let mut ledger = free_ledger(0);

    let _t1 = ledger.consume().unwrap();
    assert_eq!((ledger.tokens_used, ledger.weekly_used), (1, 1));

    let _t2 = ledger.consume().unwrap();
    assert_eq!((ledger.tokens_used, ledger.weekly_used), (2, 2));

    match ledger.consume() {
        Err(UsageError::PlanLimit { tier }) => assert_eq!(tier, Tier::Free),
        other => panic!("expected PlanLimit, got {other:?}"),
    }
    assert_eq!((ledger.tokens_used, ledger.weekly_used), (2, 2));
}

#[test]
fn token_limit_reported_when_tokens_exhausted_first() {
    let mut ledger = free_ledger(0);
    // Make tokens the binding cap.
    ledger.tokens_available = 1;
    let _t = ledger.consume().unwrap();
    match ledger.consume() {
        Err(UsageError::TokenLimit { tier }) => assert_eq!(tier, Tier::Free),
        other => panic!("expected TokenLimit, got {other:?}"),
    }
}

// --- refund ---

#[test]
fn refund_then_consume_round_trips_counters() {
    let mut ledger = free_ledger(0);
    let ticket = ledger.consume().unwrap();
    let after_consume = (ledger.tokens_used, ledger.weekly_used);

    ledger.refund(ticket);
    assert_eq!((ledger.tokens_used, ledger.weekly_used), (0, 0));

    let _ticket = ledger.consume().unwrap();
    assert_eq!((ledger.tokens_used, ledger.weekly_used), after_consume);
}

#[test]
fn refund_floors_at_zero() {
    // A ledger persisted with zero counters (older build, hand-edited
    // file) must not underflow when a ticketed refund lands on it.
    let mut ledger = free_ledger(0);
    let ticket = ledger.consume().unwrap();
    ledger.tokens_used = 0;
    ledger.weekly_used = 0;
    ledger.refund(ticket);
    assert_eq!(ledger.tokens_used, 0);
    assert_eq!(ledger.weekly_used, 0);
}

// --- rollover ---

#[test]
fn rollover_before_a_week_is_noop() {
    let mut ledger = free_ledger(1_000);
    let _t = ledger.consume().unwrap();
    assert!(!ledger.rollover_if_due(1_000 + WEEK_SECS - 1));
    assert_eq!(ledger.weekly_used, 1);
    assert_eq!(ledger.last_reset_epoch, 1_000);
}

#[test]
fn rollover_at_exactly_a_week_fires() {
    let mut ledger = free_ledger(1_000);
    let _t = ledger.consume().unwrap();
    assert!(ledger.rollover_if_due(1_000 + WEEK_SECS));
    assert_eq!(ledger.weekly_used, 0);
    assert_eq!(ledger.tokens_available, 3);
    assert_eq!(ledger.last_reset_epoch, 1_000 + WEEK_SECS);
}

#[test]
fn rollover_is_idempotent_within_a_period() {
    let mut ledger = free_ledger(0);
    let _t = ledger.consume().unwrap();

    let now = WEEK_SECS + 10;
    assert!(ledger.rollover_if_due(now));
    let after_first = ledger.clone();

    assert!(!ledger.rollover_if_due(now));
    assert!(!ledger.rollover_if_due(now + 100));
    assert_eq!(ledger, after_first);
}

#[test]
fn rollover_leaves_tokens_used_stale() {
    // tokens_used survives the reset; only availability refreshes. The
    // counter becomes meaningful again relative to the new allotment.
    let mut ledger = free_ledger(0);
    let _t1 = ledger.consume().unwrap();
    let _t2 = ledger.consume().unwrap();
    assert_eq!(ledger.tokens_used, 2);

    assert!(ledger.rollover_if_due(WEEK_SECS));
    assert_eq!(ledger.tokens_used, 2);
    assert_eq!(ledger.weekly_used, 0);
    assert_eq!(ledger.tokens_available, 3);

    // One token still consumable this period (2 used of 3 available).
    let _t3 = ledger.consume().unwrap();
    assert!(ledger.consume().is_err());
}

#[test]
fn rollover_refreshes_availability_for_current_tier() {
    let mut ledger = free_ledger(0);
    ledger.upgrade(Tier::Individual);
    ledger.tokens_available = 10; // simulate an old allotment
    assert!(ledger.rollover_if_due(WEEK_SECS));
    assert_eq!(ledger.tokens_available, 50);
    assert_eq!(ledger.weekly_limit, 25);
}

// --- upgrade ---

#[test]
fn upgrade_to_individual_resets_counters_and_sets_limits() {
    let mut ledger = free_ledger(0);
    let _t1 = ledger.consume().unwrap();
    let _t2 = ledger.consume().unwrap();

    ledger.upgrade(Tier::Individual);
    assert_eq!(ledger.subscription, Tier::Individual);
    assert_eq!(ledger.tokens_available, 50);
    assert_eq!(ledger.weekly_limit, 25);
    assert_eq!(ledger.tokens_used, 0);
    assert_eq!(ledger.weekly_used, 0);
}

#[test]
fn upgrade_to_premium_sets_999_limits() {
    let mut ledger = free_ledger(0);
    ledger.upgrade(Tier::Premium);
    assert_eq!(ledger.tokens_available, 999);
    assert_eq!(ledger.weekly_limit, 999);
}

#[test]
fn upgrade_applies_regardless_of_prior_state() {
    let mut ledger = free_ledger(0);
    ledger.tokens_used = 3;
    ledger.weekly_used = 2;
    ledger.upgrade(Tier::Individual);
    assert_eq!((ledger.tokens_used, ledger.weekly_used), (0, 0));
    assert_eq!(ledger.tokens_remaining(), 50);
}

// --- accessors / serde ---

#[test]
fn tokens_remaining_saturates() {
    let mut ledger = free_ledger(0);
    ledger.tokens_used = 5;
    ledger.tokens_available = 3;
    assert_eq!(ledger.tokens_remaining(), 0);
}

#[test]
fn next_reset_is_one_week_after_last() {
    let ledger = free_ledger(5_000);
    assert_eq!(ledger.next_reset_epoch(), 5_000 + WEEK_SECS);
}

#[test]
fn ledger_serde_roundtrip() {
    let mut ledger = free_ledger(42);
    ledger.upgrade(Tier::Premium);
    let _t = ledger.consume().unwrap();

    let json = serde_json::to_string(&ledger).unwrap();
    let back: UsageLedger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
    assert!(json.contains("\"subscription\": \"premium\"") || json.contains("\"subscription\":\"premium\""));
}
