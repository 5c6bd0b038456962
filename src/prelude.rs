//! Convenience re-exports for common use.

pub use crate::command::Command;
pub use crate::config::ChatConfig;
pub use crate::conversation::Conversation;
pub use crate::error::{ChatError, Result};
pub use crate::provider::{ChatCompletionsProvider, ChatProvider, ChatRequest};
pub use crate::session::{ChatSession, TurnState};
pub use crate::types::{ChatSettings, Message, Role};
