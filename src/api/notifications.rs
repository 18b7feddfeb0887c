use crate::api::AppState;
use crate::api::schemas::push_tokens::{NoRecipientsResponse, RegisterPushTokenRequest, RegisterPushTokenResponse};
use crate::domain::notification::{DeliveryOutcome, PushToken};
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

impl IntoResponse for DeliveryOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::NoRecipients => Json(NoRecipientsResponse::default()).into_response(),
            Self::Delivered(gateway_response) => Json(gateway_response).into_response(),
        }
    }
}

/// Adds a device token to the broadcast set.
///
/// # Errors
/// Returns `AppError::BadRequest` if the body is unreadable or over the size limit, lacks
/// `token`, or the token is empty.
pub async fn register_token(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterPushTokenRequest>, JsonRejection>,
) -> Result<Json<RegisterPushTokenResponse>> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    payload.validate().map_err(AppError::BadRequest)?;

    state.push_service.register_token(PushToken::new(payload.token));
    Ok(Json(RegisterPushTokenResponse::ok()))
}

/// Broadcasts the fixed test notification to every registered device.
///
/// # Errors
/// Returns `AppError::Gateway` if the push gateway call fails.
pub async fn send_test_push(State(state): State<AppState>) -> Result<DeliveryOutcome> {
    Ok(state.push_service.send_test_push().await?)
}

/// Broadcasts today's menu to every registered device.
///
/// # Errors
/// Returns `AppError::Gateway` if the push gateway call fails.
pub async fn send_menu_push(State(state): State<AppState>) -> Result<DeliveryOutcome> {
    Ok(state.push_service.send_menu_push().await?)
}
