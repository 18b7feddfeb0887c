use crate::adapters::push::PushError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Push gateway error: {0}")]
    Gateway(#[from] PushError),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::Gateway(e) => {
                tracing::error!(error = %e, "Push gateway call failed");
                (StatusCode::BAD_GATEWAY, format!("Push delivery failed: {e}"))
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
