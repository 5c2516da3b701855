use async_trait::async_trait;

use crate::api::models::{SendMessageRequest, SendMessageResponse};
use crate::error::ClientError;

#[async_trait]
pub trait AssistantClientTrait: Send + Sync {
    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, ClientError>;
}
