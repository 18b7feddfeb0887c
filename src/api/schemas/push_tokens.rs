use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterPushTokenRequest {
    pub token: String,
}

impl RegisterPushTokenRequest {
    /// Any non-empty string is a valid token; it is stored exactly as sent.
    ///
    /// # Errors
    /// Returns an error if the token is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.token.is_empty() {
            return Err("Token cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterPushTokenResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl RegisterPushTokenResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { status: "ok", message: "Token registered" }
    }
}

/// Returned by the broadcast triggers when nobody is registered.
#[derive(Debug, Serialize)]
pub struct NoRecipientsResponse {
    pub message: &'static str,
}

impl Default for NoRecipientsResponse {
    fn default() -> Self {
        Self { message: "no recipients" }
    }
}
