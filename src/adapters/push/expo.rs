use super::{PushError, PushGateway};
use crate::config::PushConfig;
use crate::domain::notification::PushEnvelope;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;

/// Expo push service client. One `send_batch` is exactly one POST.
#[derive(Debug, Clone)]
pub struct ExpoPushGateway {
    client: reqwest::Client,
    url: String,
    access_token: Option<String>,
}

impl ExpoPushGateway {
    /// Builds a client whose every call is bounded by the configured timeout.
    ///
    /// # Errors
    /// Returns `PushError::Transport` if the HTTP client cannot be constructed.
    pub fn new(config: &PushConfig) -> Result<Self, PushError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(PushError::Transport)?;

        Ok(Self { client, url: config.gateway_url.clone(), access_token: config.access_token.clone() })
    }
}

fn transport_error(e: reqwest::Error) -> PushError {
    if e.is_timeout() { PushError::Timeout } else { PushError::Transport(e) }
}

#[async_trait]
impl PushGateway for ExpoPushGateway {
    async fn send_batch(&self, batch: &[PushEnvelope]) -> Result<Value, PushError> {
        let mut request = self.client.post(&self.url).header(ACCEPT, "application/json").json(batch);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Status { status: status.as_u16(), body });
        }

        response.json::<Value>().await.map_err(|e| if e.is_timeout() { PushError::Timeout } else { PushError::Decode(e) })
    }
}
