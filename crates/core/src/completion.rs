//! Completion service seam
//!
//! The engine never talks HTTP itself; it hands a [`GenerationRequest`] to
//! whatever implements [`CompletionService`] and interprets any error as
//! "the generation did not happen", which triggers a quota refund. Field
//! names follow the proxy's JSON contract; `metadata` is forwarded opaquely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "deviceFingerprint")]
    pub device_fingerprint: String,
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// The generated lesson-plan text.
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Transport failures, including timeouts.
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

pub trait CompletionService {
    fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationResponse, CompletionError>;
}
