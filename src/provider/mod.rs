//! Remote chat-completion provider trait and implementations.

pub mod chat_completions;
pub mod http;

pub use chat_completions::ChatCompletionsProvider;

use async_trait::async_trait;

use crate::error::ChatError;
use crate::types::Message;

/// A request sent to a chat provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub temperature: f64,
}

/// Capability to turn an ordered message list into a single reply.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// The model ID this provider serves.
    fn model_id(&self) -> &str;

    /// Send the request and return the first choice's reply text.
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError>;
}

#[async_trait]
impl<P: ChatProvider + ?Sized> ChatProvider for &P {
    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        (**self).complete(request).await
    }
}
