//! Auth gate state machine
//!
//! Gates the application behind the external auth provider: the UI shows a
//! placeholder until the provider reports a definitive state.

mod events;
mod states;
mod transitions;

pub use events::AuthEvent;
pub use states::GateState;
pub use transitions::{AuthGate, GateTransition};
