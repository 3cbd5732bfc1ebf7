use plansmith_cli::paths::{clear_session_id, load_or_create_session_id};

#[test]
fn session_id_is_minted_once_and_reused() {
    let tmp = tempfile::tempdir().unwrap();
    let first = load_or_create_session_id(tmp.path()).unwrap();
    let second = load_or_create_session_id(tmp.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn session_id_format() {
    let tmp = tempfile::tempdir().unwrap();
    let id = load_or_create_session_id(tmp.path()).unwrap();
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "session");
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 8);
    assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn clear_forces_a_fresh_id() {
    let tmp = tempfile::tempdir().unwrap();
    let first = load_or_create_session_id(tmp.path()).unwrap();
    clear_session_id(tmp.path());

    // The millisecond stamp alone may collide on fast machines, but the
    // file must at least be recreated from scratch.
    assert!(!tmp.path().join("session_id").exists());
    let second = load_or_create_session_id(tmp.path()).unwrap();
    assert!(second.starts_with("session_"));
    let _ = first;
}

#[test]
fn whitespace_only_file_is_replaced() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("session_id"), "   \n").unwrap();
    let id = load_or_create_session_id(tmp.path()).unwrap();
    assert!(id.starts_with("session_"));
}
