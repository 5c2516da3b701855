//! Message types
//!
//! A message is immutable once created. `parent_id` optionally links it to a
//! prior message in the same chat to support threaded replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub id: Uuid,

    /// The chat this message belongs to.
    pub chat_id: Uuid,

    pub role: Role,

    pub content: String,

    /// Optional link to a prior message in the same chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a fresh id.
    pub fn new(chat_id: Uuid, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            chat_id,
            role,
            content: content.into(),
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a parent link, for threaded replies.
    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Whether this message is a reply within a thread.
    pub fn is_threaded(&self) -> bool {
        self.parent_id.is_some()
    }
}
