//! assistant_client - HTTP client for the assistant message-send API
//!
//! One JSON round trip per chat turn: the host posts the user's message plus
//! the chat's mode and system prompt, the backend answers with the assistant
//! reply content.

pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;

// Re-exports
pub use api::client::AssistantClient;
pub use api::models::{SendMessageRequest, SendMessageResponse};
pub use client_trait::AssistantClientTrait;
pub use config::Config;
pub use error::ClientError;
