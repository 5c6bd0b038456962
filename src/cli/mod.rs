//! CLI entry point for the SpongeBob chat client.

pub mod repl;

pub use repl::Repl;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::DEFAULT_TIMEOUT;
use crate::types::{ChatSettings, DEFAULT_KEEP_PAIRS, DEFAULT_TEMPERATURE, SPONGEBOB_PERSONA};

/// SpongeBob CLI chatbot (ai.sooners.us, gemma3:4b)
#[derive(Parser, Debug)]
#[command(name = "spongebob", version, about = "SpongeBob CLI chatbot (ai.sooners.us, gemma3:4b)")]
pub struct Cli {
    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Keep last N user/assistant turns
    #[arg(long, default_value_t = DEFAULT_KEEP_PAIRS)]
    pub keep: usize,

    /// Override system prompt
    #[arg(long, default_value = SPONGEBOB_PERSONA)]
    pub system: String,

    /// Env file holding SOONERAI_* settings (default: ~/.soonerai.env)
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn settings(&self) -> ChatSettings {
        ChatSettings::builder()
            .temperature(self.temperature)
            .keep_pairs(self.keep)
            .system_prompt(self.system.trim())
            .build()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
