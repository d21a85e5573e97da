//! Wire types for the relay endpoint.

use serde::{Deserialize, Serialize};

/// Inbound relay request, as posted by the browser client.
///
/// Credentials arrive with every call; nothing is held between requests.
/// Missing fields default to empty so validation answers with the relay's
/// own error shape instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub supermemory_key: String,
}

/// A message in a chat conversation.
///
/// Only role and content survive the relay; extra fields the client sends
/// are dropped here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Body forwarded to the proxied chat-completions endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

// ============================================================================
// Tests
// ============================================================================
