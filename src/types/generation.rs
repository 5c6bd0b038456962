//! Per-session generation settings.

use bon::Builder;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.6;

/// Default number of user/assistant pairs transmitted with each request.
pub const DEFAULT_KEEP_PAIRS: usize = 8;

/// Persona used when no system prompt override is given.
pub const SPONGEBOB_PERSONA: &str = "You are SpongeBob SquarePants. Speak cheerfully with nautical/ocean humor, \
enthusiastic optimism, and playful word choices. Keep replies concise for a CLI.";

/// Settings controlling each turn of a chat session.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ChatSettings {
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    /// Number of trailing user/assistant pairs sent alongside the system prompt.
    #[builder(default = DEFAULT_KEEP_PAIRS)]
    pub keep_pairs: usize,
    #[builder(into, default = SPONGEBOB_PERSONA.to_string())]
    pub system_prompt: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
