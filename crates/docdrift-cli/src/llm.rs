// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Anthropic messages API client
//!
//! One request per run: the rendered prompt goes up as a single user message,
//! and all `text` content blocks of the response come back concatenated.
//! Any transport or API failure is fatal to the run; there are no retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// LLM request errors
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP client construction or transport failure
    #[error("Request to model endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Model endpoint returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnosis
        body: String,
    },
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Client for the Anthropic messages endpoint
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl LlmClient {
    /// Create a client for the hosted messages endpoint.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Http` if the underlying HTTP client cannot be
    /// built.
    pub fn new(api_key: &str, model: &str, max_tokens: u32) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: MESSAGES_URL.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens,
        })
    }

    /// Point the client at a different endpoint, for tests.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Send `prompt` as a single user message and return the concatenated
    /// text blocks of the response.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Api` for non-success statuses (authentication,
    /// quota, validation) and `LlmError::Http` for transport failures.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("sending {} chars to {}", prompt.len(), self.model);
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        Ok(concat_text_blocks(&parsed))
    }
}

fn concat_text_blocks(response: &MessagesResponse) -> String {
    response
        .content
        .iter()
        .filter(|block| block.kind == "text")
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_request_body_shape() {
        let request = MessagesRequest {
            model: "claude-sonnet-4-20250514",
            max_tokens: 2000,
            messages: vec![Message {
                role: "user",
                content: "analyze this diff",
            }],
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "claude-sonnet-4-20250514");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "analyze this diff");
    }

    #[test]
    fn test_response_text_blocks_concatenated() {
        let body = r#"{
            "content": [
                {"type": "text", "text": "first "},
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "second"}
            ]
        }"#;

        let parsed: MessagesResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(concat_text_blocks(&parsed), "first second");
    }

    #[test]
    fn test_response_without_content_is_empty() {
        let parsed: MessagesResponse = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(concat_text_blocks(&parsed), "");
    }
}
