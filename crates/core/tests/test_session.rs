use plansmith_core::session::{MAX_PER_WINDOW, WINDOW_SECS};
use plansmith_core::{SessionWindow, UsageError};

#[test]
fn allows_up_to_five_in_an_hour() {
    let mut window = SessionWindow::default();
    for i in 0..MAX_PER_WINDOW as u64 {
        window.check_and_record(1_000 + i).unwrap();
    }
    assert_eq!(window.requests.len(), 5);
}

#[test]
fn sixth_within_the_hour_is_rejected_and_not_recorded() {
    let mut window = SessionWindow::default();
    for i in 0..5 {
        window.check_and_record(1_000 + i).unwrap();
    }
    match window.check_and_record(1_005) {
        Err(UsageError::SessionRateLimit) => {}
        other => panic!("expected SessionRateLimit, got {other:?}"),
    }
    assert_eq!(window.requests.len(), 5, "rejected request must not be recorded");
}

#[test]
fn succeeds_once_earliest_entry_ages_out() {
    let mut window = SessionWindow::default();
    for i in 0..5 {
        window.check_and_record(1_000 + i * 60).unwrap();
    }
    // Earliest entry was at 1_000; one hour later it is outside the
    // trailing window and the same sixth request goes through.
    let now = 1_000 + WINDOW_SECS;
    window.check_and_record(now).unwrap();
    assert_eq!(window.recent_count(now), 5);
    assert!(!window.requests.contains(&1_000));
}

#[test]
fn entry_aged_exactly_one_hour_is_outside_the_window() {
    let mut window = SessionWindow::default();
    window.check_and_record(0).unwrap();
    assert_eq!(window.recent_count(WINDOW_SECS - 1), 1);
    assert_eq!(window.recent_count(WINDOW_SECS), 0);
}

#[test]
fn check_trims_expired_entries() {
    let mut window = SessionWindow::default();
    for i in 0..5 {
        window.check_and_record(i).unwrap();
    }
    window.check_and_record(WINDOW_SECS + 100).unwrap();
    assert_eq!(window.requests, vec![WINDOW_SECS + 100]);
}

#[test]
fn window_serde_roundtrip() {
    let mut window = SessionWindow::default();
    window.check_and_record(7).unwrap();
    window.check_and_record(9).unwrap();

    let json = serde_json::to_string(&window).unwrap();
    let back: SessionWindow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, window);
}
