use plansmith_cli::event_log::{append, list, UsageEvent, EVENTS_FILENAME};

fn event(name: &str, timestamp: u64) -> UsageEvent {
    UsageEvent {
        timestamp,
        event: name.to_string(),
        session_id: "session_1_abcd".to_string(),
        device_fingerprint: "fp_00ff_1".to_string(),
        tier: "Free".to_string(),
        tokens_remaining: 2,
        weekly_used: 1,
        detail: serde_json::json!({ "template": "basic" }),
    }
}

#[test]
fn append_and_list_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    append(tmp.path(), &event("generation_started", 100)).unwrap();
    append(tmp.path(), &event("generation_succeeded", 101)).unwrap();

    let events = list(tmp.path(), 10).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event, "generation_started");
    assert_eq!(events[1].event, "generation_succeeded");
    assert_eq!(events[1].detail["template"], "basic");
}

#[test]
fn list_returns_last_n_oldest_first() {
    let tmp = tempfile::tempdir().unwrap();
    for i in 0..10 {
        append(tmp.path(), &event(&format!("event_{i}"), i)).unwrap();
    }
    let events = list(tmp.path(), 3).unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].event, "event_7");
    assert_eq!(events[2].event, "event_9");
}

#[test]
fn missing_log_lists_empty() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(list(tmp.path(), 10).unwrap().is_empty());
}

#[test]
fn corrupt_lines_are_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    append(tmp.path(), &event("good", 1)).unwrap();
    let path = tmp.path().join(EVENTS_FILENAME);
    let mut content = std::fs::read_to_string(&path).unwrap();
    content.push_str("{ not json\n");
    std::fs::write(&path, content).unwrap();
    append(tmp.path(), &event("also_good", 2)).unwrap();

    let events = list(tmp.path(), 10).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event, "good");
    assert_eq!(events[1].event, "also_good");
}

#[test]
fn null_detail_is_omitted_from_the_line() {
    let tmp = tempfile::tempdir().unwrap();
    let mut e = event("reset", 5);
    e.detail = serde_json::Value::Null;
    append(tmp.path(), &e).unwrap();

    let content = std::fs::read_to_string(tmp.path().join(EVENTS_FILENAME)).unwrap();
    assert!(!content.contains("\"detail\""));
    let events = list(tmp.path(), 10).unwrap();
    assert!(events[0].detail.is_null());
}
