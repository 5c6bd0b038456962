//! A chat session: one conversation driven turn by turn against a provider.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::conversation::Conversation;
use crate::error::ChatError;
use crate::provider::{ChatProvider, ChatRequest};
use crate::transcript;
use crate::types::ChatSettings;

/// Where the session is in the request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingReply,
}

/// Conversation state plus the provider that answers it.
pub struct ChatSession<P> {
    provider: P,
    settings: ChatSettings,
    conversation: Conversation,
    state: TurnState,
    transcript_dir: PathBuf,
}

impl<P: ChatProvider> ChatSession<P> {
    pub fn new(provider: P, settings: ChatSettings) -> Self {
        let conversation = Conversation::new(settings.system_prompt.trim());
        Self {
            provider,
            settings,
            conversation,
            state: TurnState::Idle,
            transcript_dir: PathBuf::new(),
        }
    }

    /// Directory for transcripts saved without an explicit path (default: working directory).
    pub fn with_transcript_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.transcript_dir = dir.into();
        self
    }

    /// Run one turn: append the user text, send the window, commit the reply.
    ///
    /// On failure the user message is rolled back so the history is exactly
    /// what it was before the call, and the error is returned for display.
    pub async fn submit(&mut self, text: &str) -> Result<String, ChatError> {
        self.begin_turn(text);
        let request = self.pending_request();
        let result = self.provider.complete(&request).await;
        self.finish_turn(result)
    }

    /// Start a turn without dispatching it. Pair with [`Self::pending_request`]
    /// and [`Self::finish_turn`] when the caller drives the call itself.
    pub fn begin_turn(&mut self, text: &str) {
        self.conversation.append_user(text);
        self.state = TurnState::AwaitingReply;
    }

    /// The windowed request for the current conversation.
    pub fn pending_request(&self) -> ChatRequest {
        ChatRequest {
            messages: self.conversation.windowed_view(self.settings.keep_pairs),
            temperature: self.settings.temperature,
        }
    }

    /// Commit a successful reply or roll back the pending user message.
    pub fn finish_turn(&mut self, result: Result<String, ChatError>) -> Result<String, ChatError> {
        match result {
            Ok(reply) => {
                self.conversation.commit_reply(reply.clone());
                self.state = TurnState::Idle;
                Ok(reply)
            }
            Err(err) => {
                self.abandon_turn();
                debug!(error = %err, "turn failed, history rolled back");
                Err(err)
            }
        }
    }

    /// Drop a turn that will never complete.
    pub fn abandon_turn(&mut self) {
        if self.state == TurnState::AwaitingReply {
            self.conversation.rollback_last_user();
            self.state = TurnState::Idle;
        }
    }

    /// Start over with only the configured system prompt.
    pub fn reset(&mut self) {
        self.conversation.reset(self.settings.system_prompt.trim());
    }

    /// Save the full history, to a timestamped file when `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, ChatError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.transcript_dir.join(transcript::default_transcript_path()));
        transcript::save_transcript(&path, self.conversation.messages())?;
        Ok(path)
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
