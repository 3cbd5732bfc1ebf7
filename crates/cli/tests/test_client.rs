use std::time::Duration;

use plansmith_cli::client::{parse_generation, HttpCompletionClient};
use plansmith_core::{CompletionError, GenerationRequest};

#[test]
fn parse_generation_extracts_plan_text() {
    let json = serde_json::json!({
        "id": "msg_123",
        "content": [{ "type": "text", "text": "# Lesson Plan\nWarm welcome circle..." }],
        "usage": { "input_tokens": 100, "output_tokens": 900 }
    });
    let resp = parse_generation(&json).unwrap();
    assert!(resp.content.starts_with("# Lesson Plan"));
}

#[test]
fn parse_generation_rejects_missing_content() {
    let json = serde_json::json!({ "error": "Anthropic API error" });
    match parse_generation(&json) {
        Err(CompletionError::Malformed(msg)) => assert!(msg.contains("content[0].text")),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn parse_generation_rejects_empty_text() {
    let json = serde_json::json!({ "content": [{ "type": "text", "text": "" }] });
    assert!(parse_generation(&json).is_err());
}

#[test]
fn parse_generation_rejects_wrong_shape() {
    let json = serde_json::json!({ "content": "just a string" });
    assert!(parse_generation(&json).is_err());
}

#[test]
fn request_serializes_with_wire_field_names() {
    let request = GenerationRequest {
        prompt: "p".to_string(),
        session_id: "session_1_abcd".to_string(),
        device_fingerprint: "fp_00ff_1".to_string(),
        metadata: serde_json::json!({ "template": "basic" }),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"sessionId\""));
    assert!(json.contains("\"deviceFingerprint\""));
    assert!(json.contains("\"metadata\""));
    assert!(!json.contains("session_id"));
}

#[test]
fn endpoint_joins_base_url_and_path() {
    let client = HttpCompletionClient::new("https://api.plansmith.dev", Duration::from_secs(5));
    assert_eq!(
        client.endpoint(),
        "https://api.plansmith.dev/api/generate-lesson"
    );
}

#[test]
fn endpoint_normalizes_trailing_slashes() {
    let client = HttpCompletionClient::new("https://api.plansmith.dev//", Duration::from_secs(5));
    assert_eq!(
        client.endpoint(),
        "https://api.plansmith.dev/api/generate-lesson"
    );
}
