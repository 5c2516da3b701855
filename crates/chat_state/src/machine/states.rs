//! Gate states - Defines the auth gate lifecycle states

use serde::{Deserialize, Serialize};

/// Defines the possible states of the auth gate.
///
/// The gate starts in `Checking` and leaves it exactly once, when the
/// provider first reports a definitive state. It never returns to
/// `Checking` short of a full restart.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Waiting for the auth provider to resolve; render a placeholder.
    #[default]
    Checking,

    /// A signed-in identity was reported; render the application.
    Authenticated,

    /// The provider resolved with no identity; render the sign-in screen.
    Unauthenticated,
}

impl GateState {
    /// Whether the provider has reported a definitive state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Checking)
    }

    /// Whether the main application should be rendered.
    pub fn allows_app(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Checking => "Resolving authentication",
            Self::Authenticated => "Signed in",
            Self::Unauthenticated => "Signed out",
        }
    }
}
