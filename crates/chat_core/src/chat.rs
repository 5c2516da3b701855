//! Chat threads
//!
//! A chat is an ordered sequence of messages plus the metadata that selects
//! how the backend answers: a mode and an optional system prompt. Insertion
//! order of `messages` is render order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{Message, Role};

/// Maximum length of a derived chat title, in characters.
const TITLE_EXCERPT_LEN: usize = 48;

/// Behavior selector for how messages in a chat are answered.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Plain conversational answering.
    #[default]
    Chat,
    /// Retrieval-augmented answering over the product knowledge base.
    Retrieval,
}

impl ChatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Retrieval => "retrieval",
        }
    }
}

/// A named thread of messages with a mode and optional system prompt.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Chat {
    pub id: Uuid,

    pub mode: ChatMode,

    /// System prompt sent with every request in this chat, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Messages in insertion (chronological) order.
    pub messages: Vec<Message>,

    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Create an empty chat with a fresh id.
    pub fn new(mode: ChatMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            system_prompt: None,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a message. Order of calls is order of rendering.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Look up a message by id.
    pub fn message(&self, id: Uuid) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Whether a message with the given id exists in this chat.
    pub fn contains_message(&self, id: Uuid) -> bool {
        self.message(id).is_some()
    }

    /// The most recently appended message.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Sidebar title: an excerpt of the first user message, or a placeholder
    /// while the chat is still empty.
    pub fn title(&self) -> String {
        let first_user = self
            .messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.trim());

        match first_user {
            Some(content) if !content.is_empty() => {
                if content.chars().count() > TITLE_EXCERPT_LEN {
                    let excerpt: String = content.chars().take(TITLE_EXCERPT_LEN).collect();
                    format!("{}…", excerpt.trim_end())
                } else {
                    content.to_string()
                }
            }
            _ => "New chat".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_creation() {
        let chat = Chat::new(ChatMode::Chat);
        assert_eq!(chat.mode, ChatMode::Chat);
        assert!(chat.system_prompt.is_none());
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_messages_preserve_insertion_order() {
        let mut chat = Chat::new(ChatMode::Chat);
        for i in 0..5 {
            chat.push_message(Message::new(chat.id, Role::User, format!("m{i}")));
        }

        let contents: Vec<_> = chat.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["m0", "m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_contains_message() {
        let mut chat = Chat::new(ChatMode::Retrieval);
        let message = Message::new(chat.id, Role::User, "hi");
        let id = message.id;
        chat.push_message(message);

        assert!(chat.contains_message(id));
        assert!(!chat.contains_message(Uuid::new_v4()));
    }

    #[test]
    fn test_title_from_first_user_message() {
        let mut chat = Chat::new(ChatMode::Chat);
        assert_eq!(chat.title(), "New chat");

        chat.push_message(Message::new(chat.id, Role::User, "pricing for the pro plan"));
        chat.push_message(Message::new(chat.id, Role::Assistant, "Sure, here it is."));
        assert_eq!(chat.title(), "pricing for the pro plan");
    }

    #[test]
    fn test_title_truncates_long_messages() {
        let mut chat = Chat::new(ChatMode::Chat);
        chat.push_message(Message::new(chat.id, Role::User, "x".repeat(100)));

        let title = chat.title();
        assert!(title.ends_with('…'));
        assert!(title.chars().count() <= TITLE_EXCERPT_LEN + 1);
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&ChatMode::Retrieval).unwrap();
        assert_eq!(json, "\"retrieval\"");
        assert_eq!(ChatMode::default(), ChatMode::Chat);
    }
}
