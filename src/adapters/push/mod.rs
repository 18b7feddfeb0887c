use crate::domain::notification::PushEnvelope;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod expo;

#[derive(Error, Debug)]
pub enum PushError {
    #[error("gateway did not respond in time")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unreadable gateway response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait PushGateway: Send + Sync + std::fmt::Debug {
    /// Submits the whole batch in a single call and returns the gateway's acknowledgment.
    ///
    /// # Errors
    /// Returns `PushError` if the call fails, times out, or the gateway answers with a
    /// non-success status.
    async fn send_batch(&self, batch: &[PushEnvelope]) -> Result<Value, PushError>;
}
