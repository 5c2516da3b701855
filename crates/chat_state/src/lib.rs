//! chat_state - Chat store and auth gate state machine
//!
//! This crate provides the process-wide chat state container (chat list,
//! active chat, typing flag, current user) and the state machine that gates
//! the application behind authentication.

pub mod error;
pub mod machine;
pub mod store;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use machine::{AuthEvent, AuthGate, GateState, GateTransition};
pub use store::ChatStore;
