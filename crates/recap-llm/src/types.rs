use serde::{Deserialize, Serialize};

/// Role of a message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Message within a completion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message role
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Build a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Completion request issued to the provider
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f64,
}

/// Incremental event decoded from the provider stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Incremental completion text
    Delta(String),
    /// Stream has completed
    Done,
}
