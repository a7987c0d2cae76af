//! `OpenAI` chat completion API wire format types
//!
//! Only the fields the relay actually sends or reads are modeled; chunk
//! deserialization tolerates everything else the API includes.

use serde::{Deserialize, Serialize};

use crate::types::Message;

/// Chat completion request body
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Conversation messages
    pub messages: &'a [Message],
    /// Sampling temperature
    pub temperature: f64,
    /// Whether to stream the response
    pub stream: bool,
}

/// Streaming chat completion chunk
#[derive(Debug, Deserialize)]
pub(crate) struct ChatStreamChunk {
    /// Delta choices (empty on usage-only chunks)
    #[serde(default)]
    pub choices: Vec<ChatStreamChoice>,
}

/// Choice within a streaming chunk
#[derive(Debug, Deserialize)]
pub(crate) struct ChatStreamChoice {
    /// Incremental delta
    pub delta: ChatStreamDelta,
}

/// Delta content within a streaming choice
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChatStreamDelta {
    /// Incremental text content (absent on role-only and final chunks)
    #[serde(default)]
    pub content: Option<String>,
}
