//! Chat controller service

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assistant_client::{AssistantClientTrait, SendMessageRequest};
use chat_core::{ChatMode, Role};
use chat_state::{ChatStore, StoreError};
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::error;
use uuid::Uuid;

use crate::error::{ControllerError, Result};

/// Floor on perceived response time. Replies that come back faster are held
/// until the timer expires so the UI does not flash an instant answer.
const MIN_RESPONSE_DELAY: Duration = Duration::from_millis(700);

/// Chat Controller - orchestrates one chat turn at a time
pub struct ChatController<C: AssistantClientTrait> {
    client: Arc<C>,
    store: Arc<RwLock<ChatStore>>,
    min_response_delay: Duration,
    /// Busy-guard: set while a send is outstanding.
    in_flight: AtomicBool,
    /// Transient loading flag, readable without the store lock.
    is_loading: AtomicBool,
    /// Human-readable message from the most recent failed send.
    last_error: RwLock<Option<String>>,
}

impl<C: AssistantClientTrait> ChatController<C> {
    /// Create a controller over a shared store and client.
    pub fn new(client: Arc<C>, store: Arc<RwLock<ChatStore>>) -> Self {
        Self {
            client,
            store,
            min_response_delay: MIN_RESPONSE_DELAY,
            in_flight: AtomicBool::new(false),
            is_loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Override the minimum perceived response time. Tests usually pass
    /// `Duration::ZERO`.
    pub fn with_min_response_delay(mut self, delay: Duration) -> Self {
        self.min_response_delay = delay;
        self
    }

    /// Submit a user message and drive the turn to completion.
    ///
    /// Picks the target chat (creating one when none is active or the
    /// requested mode differs), appends the user message before any network
    /// step, then calls the send API and appends the assistant reply.
    /// Returns the target chat id.
    ///
    /// A second call while one is outstanding is refused with `Busy` rather
    /// than interleaving store mutations.
    pub async fn send_user_message(
        &self,
        content: impl Into<String>,
        mode: Option<ChatMode>,
        parent_id: Option<Uuid>,
    ) -> Result<Uuid> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ControllerError::EmptyContent);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ControllerError::Busy);
        }

        let result = self.run_send(content, mode, parent_id).await;

        // Flags are reset on every exit path, success or failure.
        self.store.write().await.set_is_typing(false);
        self.is_loading.store(false, Ordering::Release);
        self.in_flight.store(false, Ordering::Release);

        result
    }

    async fn run_send(
        &self,
        content: String,
        mode: Option<ChatMode>,
        parent_id: Option<Uuid>,
    ) -> Result<Uuid> {
        // Resolve the target chat, append the user message optimistically,
        // and snapshot the request while holding the lock once.
        let (chat_id, request) = {
            let mut store = self.store.write().await;

            let previous_active = store.active_chat_id();
            let reusable = store
                .active_chat()
                .filter(|chat| mode.is_none() || mode == Some(chat.mode))
                .map(|chat| chat.id);
            let (chat_id, created) = match reusable {
                Some(chat_id) => (chat_id, false),
                None => (store.create_chat(mode.unwrap_or_default()), true),
            };

            if let Err(err) = store.add_message(chat_id, &content, Role::User, parent_id) {
                // Roll back a chat created for this turn so a rejected
                // message does not leave an empty chat behind or steal the
                // active slot.
                if created {
                    store.remove_chat(chat_id);
                    if let Some(previous) = previous_active {
                        store.set_active_chat(previous);
                    }
                }
                return Err(err.into());
            }
            store.set_is_typing(true);

            let chat = store
                .chat(chat_id)
                .ok_or(StoreError::ChatNotFound(chat_id))?;
            let request = SendMessageRequest {
                content,
                mode: mode.unwrap_or(chat.mode),
                chat_id,
                system_prompt: chat.system_prompt.clone(),
                model: None,
            };
            (chat_id, request)
        };
        self.is_loading.store(true, Ordering::Release);

        // Wait for the later of {reply, minimum delay}. The timer only
        // delays success, it never aborts the call.
        let (response, _) = tokio::join!(
            self.client.send_message(request),
            sleep(self.min_response_delay)
        );

        match response {
            Ok(reply) => {
                let mut store = self.store.write().await;
                store.add_message(chat_id, reply.content, Role::Assistant, parent_id)?;
                *self.last_error.write().await = None;
                Ok(chat_id)
            }
            Err(err) => {
                error!(%chat_id, "send failed: {err}");
                let message = err.to_string();
                *self.last_error.write().await = Some(message.clone());
                Err(ControllerError::Send(message))
            }
        }
    }

    /// Whether a send is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    /// Message from the most recent failed send, cleared on the next
    /// success.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// The shared store this controller mutates.
    pub fn store(&self) -> Arc<RwLock<ChatStore>> {
        Arc::clone(&self.store)
    }
}
