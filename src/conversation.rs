//! Conversation history with a windowed outbound view.
//!
//! The stored history always starts with the system prompt and is never
//! shrunk by windowing, so a saved transcript holds every turn. Only the
//! copy handed to the provider is bounded.

use crate::types::{Message, Role};

/// Ordered message history for a single chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation holding only the given system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Append a user message. Callers filter blank input beforehand.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Append the assistant reply for the pending turn.
    pub fn commit_reply(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Drop the user message of a turn whose remote call failed.
    ///
    /// Returns the removed message, or `None` when the newest message is not
    /// a user message (the system prompt is never removed).
    pub fn rollback_last_user(&mut self) -> Option<Message> {
        match self.messages.last() {
            Some(last) if last.role == Role::User && self.messages.len() > 1 => self.messages.pop(),
            _ => None,
        }
    }

    /// Replace the whole history with a fresh system prompt.
    pub fn reset(&mut self, system_prompt: impl Into<String>) {
        self.messages = vec![Message::system(system_prompt)];
    }

    /// System message plus the last `2 * keep_pairs` messages, in order.
    pub fn windowed_view(&self, keep_pairs: usize) -> Vec<Message> {
        let Some((system, rest)) = self.messages.split_first() else {
            return Vec::new();
        };
        let keep = keep_pairs.saturating_mul(2).min(rest.len());
        let mut view = Vec::with_capacity(keep + 1);
        view.push(system.clone());
        view.extend_from_slice(&rest[rest.len() - keep..]);
        view
    }

    /// Full, untruncated history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system_prompt(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
