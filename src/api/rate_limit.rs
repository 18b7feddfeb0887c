use crate::services::rate_limit_service::RateLimitService;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Which governor tier a group of routes sits behind.
#[derive(Clone, Debug)]
pub struct RateLimitScope {
    service: RateLimitService,
    tier: &'static str,
}

impl RateLimitScope {
    #[must_use]
    pub const fn new(service: RateLimitService, tier: &'static str) -> Self {
        Self { service, tier }
    }
}

/// Records the decision of the governor layer directly inside this one.
///
/// Only mounted on governed routes, so any status other than 429 means the limiter let the
/// request through.
pub async fn log_rate_limit_events(State(scope): State<RateLimitScope>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    let retry_after = response
        .headers()
        .get("retry-after")
        .or_else(|| response.headers().get("x-ratelimit-after"))
        .and_then(|v| v.to_str().ok());
    scope.service.log_decision(scope.tier, response.status(), retry_after);

    response
}
