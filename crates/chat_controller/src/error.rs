//! Controller error types

use chat_state::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("message content cannot be empty")]
    EmptyContent,

    #[error("a send is already in flight")]
    Busy,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("send failed: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, ControllerError>;
