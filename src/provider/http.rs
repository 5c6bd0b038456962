//! HTTP client construction and response helpers.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::ChatError;

/// Build a client whose every request is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ChatError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ChatError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a transport failure, separating timeouts from other network errors.
pub fn transport_error(url: &str, timeout: Duration, err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ChatError::Timeout(timeout)
    } else {
        ChatError::Network {
            url: url.to_string(),
            source: err,
        }
    }
}

/// Body text of an error response, or a note saying why it could not be read.
pub fn error_body_text(body: Result<String, reqwest::Error>) -> String {
    body.unwrap_or_else(|e| format!("<failed to read response body: {e}>"))
}

/// Pull `choices[0].message.content` out of a chat completion body.
pub fn first_choice_content(body: &serde_json::Value) -> Result<String, ChatError> {
    body.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
            ChatError::MalformedResponse(pretty)
        })
}
