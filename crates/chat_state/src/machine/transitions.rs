//! Gate transitions - event-driven auth gate logic
//!
//! The gate owns the transition rules and the store reconciliation that
//! keeps the store's user in sync with the provider's identity.

use chat_core::User;
use tracing::info;

use super::events::AuthEvent;
use super::states::GateState;
use crate::store::ChatStore;

/// Represents a gate transition result.
#[derive(Debug, Clone)]
pub struct GateTransition {
    /// The state before the transition.
    pub from: GateState,
    /// The state after the transition.
    pub to: GateState,
    /// The event that triggered the transition.
    pub event: AuthEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine gating the application behind authentication.
#[derive(Debug, Clone)]
pub struct AuthGate {
    /// Current state.
    current_state: GateState,
    /// Transition history (limited).
    history: Vec<GateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGate {
    /// Create a new gate in Checking state.
    pub fn new() -> Self {
        Self {
            current_state: GateState::Checking,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> GateState {
        self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[GateTransition] {
        &self.history
    }

    /// Handle a provider report, transition, and reconcile the store.
    ///
    /// On `SignedIn` the store's user is refreshed from the identity; on
    /// `SignedOut` it is cleared.
    pub fn handle_event(&mut self, event: AuthEvent, store: &mut ChatStore) -> GateTransition {
        let old_state = self.current_state;
        let new_state = self.compute_next_state(old_state, &event);
        let changed = old_state != new_state;

        match &event {
            AuthEvent::SignedIn { identity } => {
                if store.user().is_none() {
                    // Self-heal store/provider desync.
                    info!(uid = %identity.uid, "synthesizing user from provider identity");
                }
                store.set_user(Some(User::from_identity(identity)));
            }
            AuthEvent::SignedOut => store.set_user(None),
            AuthEvent::ProviderPending => {}
        }

        self.current_state = new_state;

        let transition = GateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(&self, state: GateState, event: &AuthEvent) -> GateState {
        use AuthEvent::*;
        use GateState::*;

        match (state, event) {
            (Checking, ProviderPending) => Checking,
            (Checking, SignedIn { .. }) => Authenticated,
            (Checking, SignedOut) => Unauthenticated,

            // Later sign-in / sign-out reports flip between the resolved
            // states; nothing returns to Checking.
            (Unauthenticated, SignedIn { .. }) => Authenticated,
            (Authenticated, SignedOut) => Unauthenticated,

            _ => state,
        }
    }
}
