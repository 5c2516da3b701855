use async_trait::async_trait;
use log::{error, info};
use reqwest::header::HeaderMap;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use crate::api::models::{SendMessageRequest, SendMessageResponse};
use crate::client_trait::AssistantClientTrait;
use crate::config::Config;
use crate::error::ClientError;

const SEND_MESSAGE_PATH: &str = "/v1/messages";

/// HTTP client for the assistant message-send API.
#[derive(Debug)]
pub struct AssistantClient {
    client: ClientWithMiddleware,
    config: Config,
}

impl AssistantClient {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        if config.api_base.trim().is_empty() {
            return Err(ClientError::InvalidConfig("api_base is empty".to_string()));
        }

        let client = Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        Ok(Self {
            client: Self::build_retry_client(client),
            config,
        })
    }

    fn build_retry_client(client: Client) -> ClientWithMiddleware {
        // Exponential backoff: 1s, 2s, 4s with jitter
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("accept", "application/json".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        headers
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}{}",
            self.config.api_base.trim_end_matches('/'),
            SEND_MESSAGE_PATH
        )
    }
}

#[async_trait]
impl AssistantClientTrait for AssistantClient {
    async fn send_message(
        &self,
        mut request: SendMessageRequest,
    ) -> Result<SendMessageResponse, ClientError> {
        if request.model.is_none() {
            request.model = self.config.model.clone();
        }

        let url = self.send_message_url();
        info!("sending chat turn to {} (mode: {:?})", url, request.mode);

        let mut builder = self.client.post(&url).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("send API failed with {}: {}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<SendMessageResponse>().await?;
        Ok(body)
    }
}
