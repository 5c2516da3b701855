//! Gate events - Reports from the external auth provider

use chat_core::ProviderIdentity;
use serde::{Deserialize, Serialize};

/// Defines the events the auth provider can report to the gate.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AuthEvent {
    /// The provider has not resolved yet (loading flag still set).
    ProviderPending,

    /// The provider reported a signed-in identity.
    SignedIn { identity: ProviderIdentity },

    /// The provider resolved with no identity, or the user signed out.
    SignedOut,
}

impl AuthEvent {
    /// Whether this event carries a definitive answer from the provider.
    pub fn is_definitive(&self) -> bool {
        !matches!(self, Self::ProviderPending)
    }
}
