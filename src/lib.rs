//! SpongeBob chat client.
//!
//! A multi-turn command-line chat client for OpenAI-compatible chat
//! completion endpoints. The [`conversation::Conversation`] keeps the full
//! history while only a window of recent turns is sent with each request.
//!
//! # Quick Start
//!
//! ```no_run
//! use spongebob::prelude::*;
//!
//! # async fn example() -> spongebob::error::Result<()> {
//! let config = ChatConfig::load(None)?;
//! let provider = ChatCompletionsProvider::new(config)?;
//! let mut session = ChatSession::new(provider, ChatSettings::default());
//! let reply = session.submit("Who lives in a pineapple under the sea?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod conversation;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod session;
pub mod transcript;
pub mod types;
