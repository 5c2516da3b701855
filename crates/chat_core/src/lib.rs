//! chat_core - Core types for the assistant chat system
//!
//! This crate provides the foundational types used across all chat-related
//! crates:
//! - `user` - User and the provider identity it is synthesized from
//! - `message` - Message and Role
//! - `chat` - Chat threads and ChatMode

pub mod chat;
pub mod message;
pub mod user;

// Re-export commonly used types
pub use chat::{Chat, ChatMode};
pub use message::{Message, Role};
pub use user::{ProviderIdentity, User};
