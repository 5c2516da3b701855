//! Chat store - process-wide chat state
//!
//! Holds all chats, the active chat id, the typing flag, and the current
//! user. Mutated only through the operations defined here; the host is
//! expected to serialize access (single UI thread, or a lock around the
//! store in a multi-threaded host).

use chat_core::{Chat, ChatMode, Message, Role, User};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Process-wide chat state.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ChatStore {
    /// All chats, in creation order. Ids are unique.
    chats: Vec<Chat>,

    /// Currently active chat, if any. At most one chat is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    active_chat: Option<Uuid>,

    /// Whether the assistant is composing a reply (transient UI flag).
    #[serde(default)]
    is_typing: bool,

    /// Current authenticated user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,
}

impl ChatStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new chat with the given mode, activate it, and return its
    /// id.
    pub fn create_chat(&mut self, mode: ChatMode) -> Uuid {
        let chat = Chat::new(mode);
        let id = chat.id;
        self.chats.push(chat);
        self.active_chat = Some(id);
        id
    }

    /// Append a message to an existing chat and return the new message id.
    ///
    /// A `parent_id` must resolve to a message already in the same chat.
    /// Unknown chat ids and dangling parents are reported as errors and
    /// leave the store untouched.
    pub fn add_message(
        &mut self,
        chat_id: Uuid,
        content: impl Into<String>,
        role: Role,
        parent_id: Option<Uuid>,
    ) -> Result<Uuid> {
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == chat_id)
            .ok_or(StoreError::ChatNotFound(chat_id))?;

        if let Some(parent_id) = parent_id {
            if !chat.contains_message(parent_id) {
                return Err(StoreError::ParentNotFound { chat_id, parent_id });
            }
        }

        let mut message = Message::new(chat_id, role, content);
        if let Some(parent_id) = parent_id {
            message = message.with_parent(parent_id);
        }
        let id = message.id;
        chat.push_message(message);
        Ok(id)
    }

    /// Remove a chat. Clears the active chat if it was the one removed.
    /// Returns whether a chat was removed.
    pub fn remove_chat(&mut self, chat_id: Uuid) -> bool {
        if let Some(pos) = self.chats.iter().position(|c| c.id == chat_id) {
            self.chats.remove(pos);
            if self.active_chat == Some(chat_id) {
                self.active_chat = None;
            }
            true
        } else {
            false
        }
    }

    /// Toggle the typing indicator.
    pub fn set_is_typing(&mut self, is_typing: bool) {
        self.is_typing = is_typing;
    }

    /// Change an existing chat's mode in place. A missing chat is a logged
    /// no-op.
    pub fn update_chat_mode(&mut self, chat_id: Uuid, mode: ChatMode) {
        match self.chats.iter_mut().find(|c| c.id == chat_id) {
            Some(chat) => chat.mode = mode,
            None => warn!(%chat_id, "update_chat_mode ignored: chat not found"),
        }
    }

    /// Set or clear a chat's system prompt. A missing chat is a logged
    /// no-op.
    pub fn set_system_prompt(&mut self, chat_id: Uuid, system_prompt: Option<String>) {
        match self.chats.iter_mut().find(|c| c.id == chat_id) {
            Some(chat) => chat.system_prompt = system_prompt,
            None => warn!(%chat_id, "set_system_prompt ignored: chat not found"),
        }
    }

    /// Set or clear the current user.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Make a chat active, if it exists.
    pub fn set_active_chat(&mut self, chat_id: Uuid) {
        if self.chats.iter().any(|c| c.id == chat_id) {
            self.active_chat = Some(chat_id);
        } else {
            warn!(%chat_id, "set_active_chat ignored: chat not found");
        }
    }

    // ===== Accessors =====

    pub fn chat(&self, chat_id: Uuid) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn active_chat_id(&self) -> Option<Uuid> {
        self.active_chat
    }

    pub fn active_chat(&self) -> Option<&Chat> {
        self.active_chat.and_then(|id| self.chat(id))
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_chat_activates_it() {
        let mut store = ChatStore::new();
        assert!(store.active_chat_id().is_none());

        let id = store.create_chat(ChatMode::Chat);
        assert_eq!(store.active_chat_id(), Some(id));
        assert_eq!(store.chats().len(), 1);

        let second = store.create_chat(ChatMode::Retrieval);
        assert_eq!(store.active_chat_id(), Some(second));
        assert_eq!(store.chats().len(), 2);
    }

    #[test]
    fn test_add_message_preserves_order() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);

        store.add_message(chat_id, "one", Role::User, None).unwrap();
        store
            .add_message(chat_id, "two", Role::Assistant, None)
            .unwrap();
        store.add_message(chat_id, "three", Role::User, None).unwrap();

        let chat = store.chat(chat_id).unwrap();
        let contents: Vec<_> = chat.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "two", "three"]);
    }

    #[test]
    fn test_add_message_unknown_chat_mutates_nothing() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);

        let result = store.add_message(Uuid::new_v4(), "hi", Role::User, None);
        assert!(matches!(result, Err(StoreError::ChatNotFound(_))));
        assert!(store.chat(chat_id).unwrap().messages.is_empty());
    }

    #[test]
    fn test_add_message_rejects_dangling_parent() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);

        let result = store.add_message(chat_id, "reply", Role::User, Some(Uuid::new_v4()));
        assert!(matches!(result, Err(StoreError::ParentNotFound { .. })));
        assert!(store.chat(chat_id).unwrap().messages.is_empty());
    }

    #[test]
    fn test_add_message_rejects_parent_from_other_chat() {
        let mut store = ChatStore::new();
        let first = store.create_chat(ChatMode::Chat);
        let root = store.add_message(first, "root", Role::User, None).unwrap();

        let second = store.create_chat(ChatMode::Chat);
        let result = store.add_message(second, "reply", Role::User, Some(root));
        assert!(matches!(result, Err(StoreError::ParentNotFound { .. })));
    }

    #[test]
    fn test_threaded_reply_links_parent() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);
        let root = store.add_message(chat_id, "root", Role::User, None).unwrap();
        let reply = store
            .add_message(chat_id, "reply", Role::Assistant, Some(root))
            .unwrap();

        let chat = store.chat(chat_id).unwrap();
        assert_eq!(chat.message(reply).unwrap().parent_id, Some(root));
    }

    #[test]
    fn test_remove_chat_clears_active() {
        let mut store = ChatStore::new();
        let first = store.create_chat(ChatMode::Chat);
        let second = store.create_chat(ChatMode::Chat);
        assert_eq!(store.active_chat_id(), Some(second));

        assert!(store.remove_chat(second));
        assert!(store.active_chat_id().is_none());
        assert!(store.chat(first).is_some());

        // Removing a non-active chat leaves the active id alone
        store.set_active_chat(first);
        let third = store.create_chat(ChatMode::Chat);
        store.set_active_chat(first);
        assert!(store.remove_chat(third));
        assert_eq!(store.active_chat_id(), Some(first));

        assert!(!store.remove_chat(Uuid::new_v4()));
    }

    #[test]
    fn test_update_chat_mode() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);

        store.update_chat_mode(chat_id, ChatMode::Retrieval);
        assert_eq!(store.chat(chat_id).unwrap().mode, ChatMode::Retrieval);

        // Missing chat is a silent no-op
        store.update_chat_mode(Uuid::new_v4(), ChatMode::Chat);
        assert_eq!(store.chat(chat_id).unwrap().mode, ChatMode::Retrieval);
    }

    #[test]
    fn test_set_system_prompt() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);

        store.set_system_prompt(chat_id, Some("Be concise.".to_string()));
        assert_eq!(
            store.chat(chat_id).unwrap().system_prompt.as_deref(),
            Some("Be concise.")
        );

        store.set_system_prompt(chat_id, None);
        assert!(store.chat(chat_id).unwrap().system_prompt.is_none());
    }

    #[test]
    fn test_set_active_chat_unknown_id_ignored() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Chat);

        store.set_active_chat(Uuid::new_v4());
        assert_eq!(store.active_chat_id(), Some(chat_id));
    }

    #[test]
    fn test_user_lifecycle() {
        use chat_core::{ProviderIdentity, User};

        let mut store = ChatStore::new();
        assert!(store.user().is_none());

        let user = User::from_identity(&ProviderIdentity::new("u1"));
        store.set_user(Some(user.clone()));
        assert_eq!(store.user(), Some(&user));

        store.set_user(None);
        assert!(store.user().is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut store = ChatStore::new();
        let chat_id = store.create_chat(ChatMode::Retrieval);
        store.add_message(chat_id, "hi", Role::User, None).unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let restored: ChatStore = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.active_chat_id(), Some(chat_id));
        assert_eq!(restored.chat(chat_id).unwrap().messages.len(), 1);
    }
}
