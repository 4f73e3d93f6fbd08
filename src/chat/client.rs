//! Chat service HTTP client
//!
//! Posts `{"prompt": ...}` to the configured endpoint and reads back
//! `{"response": ...}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ChatConfig;

/// Reasons a chat request failed
///
/// Every variant is the same outcome for the caller: the request failed.
/// The variant only refines the message that ends up in the log.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection or transport failure
    #[error("Request failed: network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("Request failed: status {code}: {message}")]
    Status { code: u16, message: String },

    /// The body was not `{"response": "<text>"}`
    #[error("Request failed: malformed response: {0}")]
    Parse(String),

    /// The worker went away before the request settled
    #[error("Request failed: chat worker unavailable")]
    WorkerUnavailable,
}

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponseBody {
    response: String,
}

/// Error body the chat service sends with 4xx/5xx responses
#[derive(Debug, Deserialize)]
struct ChatErrorBody {
    error: String,
}

/// Client for the chat endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize the request body for a prompt
    pub fn build_request_body(&self, prompt: &str) -> Result<String, ChatError> {
        serde_json::to_string(&ChatRequestBody { prompt })
            .map_err(|e| ChatError::Parse(e.to_string()))
    }

    /// Send one prompt and wait for the generated text
    ///
    /// No retry and no client-side timeout; the transport defaults apply.
    pub async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let body = self.build_request_body(prompt)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ChatError::Status {
                code: status.as_u16(),
                message: error_message(&text),
            });
        }

        parse_response(&text)
    }
}

/// Extract the generated text from a success body
fn parse_response(body: &str) -> Result<String, ChatError> {
    serde_json::from_str::<ChatResponseBody>(body)
        .map(|parsed| parsed.response)
        .map_err(|e| ChatError::Parse(e.to_string()))
}

/// Prefer the service's `error` field, fall back to the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ChatErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "empty body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
