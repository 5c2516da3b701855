//! Wire models for the message-send API

use chat_core::ChatMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One chat turn sent to the backend.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SendMessageRequest {
    /// The user's message text.
    pub content: String,

    /// Which backend behavior to invoke.
    pub mode: ChatMode,

    /// The chat this turn belongs to; lets the backend keep per-chat state.
    pub chat_id: Uuid,

    /// Optional system prompt attached to the chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Optional model override from config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// The assistant's reply for one chat turn.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SendMessageResponse {
    pub content: String,
}
