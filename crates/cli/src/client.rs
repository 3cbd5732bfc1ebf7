//! HTTP client for the lesson generation proxy

use std::time::Duration;

use plansmith_core::{CompletionError, CompletionService, GenerationRequest, GenerationResponse};
use serde_json::Value;

use crate::config::ServiceConfig;

const GENERATE_PATH: &str = "/api/generate-lesson";

pub struct HttpCompletionClient {
    base_url: String,
    timeout: Duration,
}

impl HttpCompletionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, timeout }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }
}

impl CompletionService for HttpCompletionClient {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, CompletionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let resp = client
            .post(self.endpoint())
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Network(format!(
                        "request timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else {
                    CompletionError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = resp
            .json()
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;
        parse_generation(&json)
    }
}

/// Extracts the plan text from the proxy's passthrough of the model
/// response: `content[0].text`.
pub fn parse_generation(json: &Value) -> Result<GenerationResponse, CompletionError> {
    match json["content"][0]["text"].as_str() {
        Some(text) if !text.is_empty() => Ok(GenerationResponse {
            content: text.to_string(),
        }),
        _ => Err(CompletionError::Malformed(
            "response missing content[0].text".to_string(),
        )),
    }
}
