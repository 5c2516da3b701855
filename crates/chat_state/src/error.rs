//! Store error types

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Chat not found: {0}")]
    ChatNotFound(Uuid),

    #[error("Parent message {parent_id} not found in chat {chat_id}")]
    ParentNotFound { chat_id: Uuid, parent_id: Uuid },
}

pub type Result<T> = std::result::Result<T, StoreError>;
