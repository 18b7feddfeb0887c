use serde::Serialize;
use serde_json::Value;

/// Opaque device address issued by the mobile push provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PushToken(String);

impl PushToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PushToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
}

impl PushMessage {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

/// One entry of a gateway batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushEnvelope {
    pub to: String,
    pub title: String,
    pub body: String,
    pub sound: String,
}

impl PushEnvelope {
    #[must_use]
    pub fn new(token: &PushToken, message: &PushMessage, sound: &str) -> Self {
        Self {
            to: token.as_str().to_owned(),
            title: message.title.clone(),
            body: message.body.clone(),
            sound: sound.to_owned(),
        }
    }
}

/// Result of a broadcast. Transport failures are reported through the `Err` arm.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// The registry was empty; no gateway call was made.
    NoRecipients,
    /// The gateway accepted the batch. Holds its response verbatim.
    Delivered(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastKind {
    Test,
    Menu,
}

impl BroadcastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Menu => "menu",
        }
    }
}
