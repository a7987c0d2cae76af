//! Streaming chat-completion client for the recap relay
//!
//! Speaks the `OpenAI` chat completions wire format with streaming always
//! enabled, and decodes the SSE response into plain text deltas for the
//! relay to forward.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod protocol;
mod types;

pub use client::CompletionClient;
pub use error::LlmError;
pub use types::{CompletionRequest, Message, Role, StreamEvent};
