//! Core types for the chat client.

pub mod generation;
pub mod message;

pub use generation::*;
pub use message::*;
