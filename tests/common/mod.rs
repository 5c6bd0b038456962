//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use spongebob::error::ChatError;
use spongebob::provider::{ChatProvider, ChatRequest};

/// A mock provider that returns queued results and records every request.
pub struct MockProvider {
    model_id: String,
    responses: Mutex<VecDeque<Result<String, ChatError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply.
    pub fn queue_response(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    /// Queue a failed call.
    pub fn queue_error(&self, err: ChatError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()))
    }
}

/// A provider whose calls never resolve.
pub struct HangingProvider;

#[async_trait]
impl ChatProvider for HangingProvider {
    fn model_id(&self) -> &str {
        "hanging-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<String, ChatError> {
        std::future::pending().await
    }
}

/// Whether `name` looks like `transcript-YYYYMMDD-HHMMSS.txt` for one of `dates`.
pub fn is_dated_transcript_name(name: &str, dates: &[String]) -> bool {
    dates.iter().any(|date| {
        name.strip_prefix(&format!("transcript-{date}-"))
            .and_then(|rest| rest.strip_suffix(".txt"))
            .is_some_and(|time| time.len() == 6 && time.bytes().all(|b| b.is_ascii_digit()))
    })
}

/// Today's local date as `YYYYMMDD`.
pub fn local_date() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}
