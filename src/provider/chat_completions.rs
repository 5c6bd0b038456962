//! OpenAI-compatible Chat Completions provider.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ChatConfig;
use crate::error::ChatError;

use super::http::{
    bearer_headers, build_client, error_body_text, first_choice_content, transport_error,
};
use super::{ChatProvider, ChatRequest};

/// Provider posting to `{base_url}/api/chat/completions`.
pub struct ChatCompletionsProvider {
    client: reqwest::Client,
    config: ChatConfig,
    url: String,
}

impl ChatCompletionsProvider {
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let client = build_client(config.timeout())?;
        let url = config.chat_url();
        Ok(Self {
            client,
            config,
            url,
        })
    }

    fn build_request_body(&self, request: &ChatRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model(),
            "messages": request.messages,
            "temperature": request.temperature,
        })
    }
}

#[async_trait]
impl ChatProvider for ChatCompletionsProvider {
    fn model_id(&self) -> &str {
        self.config.model()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let body = self.build_request_body(request);

        debug!(
            model = self.config.model(),
            messages = request.messages.len(),
            "chat completion request"
        );

        let resp = self
            .client
            .post(&self.url)
            .headers(bearer_headers(self.config.api_key()))
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&self.url, self.config.timeout(), e))?;

        let status = resp.status().as_u16();
        debug!(status, "chat completion response");
        if status != 200 {
            let body_text = error_body_text(resp.text().await);
            return Err(ChatError::api(status, body_text));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| transport_error(&self.url, self.config.timeout(), e))?;
        let data: serde_json::Value = serde_json::from_str(&text)
            .map_err(|_| ChatError::MalformedResponse(text.clone()))?;
        first_choice_content(&data)
    }
}
