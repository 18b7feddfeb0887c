use crate::api::MgmtState;
use crate::api::schemas::health::HealthResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe. The service has no backing stores, so being able to answer is enough.
pub async fn readyz(State(state): State<MgmtState>) -> impl IntoResponse {
    let response =
        HealthResponse { status: "ok".to_string(), registered_tokens: state.health_service.registered_tokens() };

    (StatusCode::OK, Json(response))
}
