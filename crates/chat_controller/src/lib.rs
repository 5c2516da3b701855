//! chat_controller - Chat turn orchestration
//!
//! Coordinates one chat turn end to end: pick or create the target chat,
//! append the user message, call the send API paced by a minimum-delay
//! timer, append the assistant reply, and keep the transient flags honest
//! on every exit path.

pub mod controller;
pub mod error;

// Re-exports
pub use controller::ChatController;
pub use error::ControllerError;
