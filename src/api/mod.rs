use crate::api::rate_limit::{RateLimitScope, log_rate_limit_events};
use crate::config::Config;
use crate::services::catalog_service::CatalogService;
use crate::services::health_service::HealthService;
use crate::services::push_service::PushService;
use crate::services::rate_limit_service::RateLimitService;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request, StatusCode};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::GovernorLayer;
use tower_governor::governor::GovernorConfigBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod docs;
pub mod health;
pub mod notifications;
pub mod rate_limit;
pub mod schemas;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on a token registration body. Token contents are otherwise accepted as sent.
pub const REGISTER_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: CatalogService,
    pub push_service: PushService,
    pub rate_limit_service: RateLimitService,
}

#[derive(Clone, Debug)]
pub struct MgmtState {
    pub health_service: HealthService,
}

#[derive(Debug)]
pub struct ServiceContainer {
    pub catalog: CatalogService,
    pub push_service: PushService,
    pub rate_limit_service: RateLimitService,
}

/// Configures and returns the public API router. Everything is mounted under `/api`.
///
/// The router must be served with `into_make_service_with_connect_info::<SocketAddr>()`
/// so the rate limiters can see the client address.
///
/// # Panics
/// Panics if the rate limiter configuration cannot be constructed.
pub fn app_router(config: &Config, services: ServiceContainer) -> Router {
    let std_interval_ns = 1_000_000_000 / config.rate_limit.per_second.max(1);
    let standard_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(u64::from(std_interval_ns))
            .burst_size(config.rate_limit.burst.max(1))
            .key_extractor(services.rate_limit_service.extractor.clone())
            .finish()
            .expect("Failed to build standard rate limiter config"),
    );

    // Push tier: every call here may fan out to the whole registry.
    let push_interval_ns = 1_000_000_000 / config.rate_limit.push_per_second.max(1);
    let push_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(u64::from(push_interval_ns))
            .burst_size(config.rate_limit.push_burst.max(1))
            .key_extractor(services.rate_limit_service.extractor.clone())
            .finish()
            .expect("Failed to build push rate limiter config"),
    );

    let state = AppState {
        catalog: services.catalog,
        push_service: services.push_service,
        rate_limit_service: services.rate_limit_service,
    };

    let standard_scope = RateLimitScope::new(state.rate_limit_service.clone(), "standard");
    let push_scope = RateLimitScope::new(state.rate_limit_service.clone(), "push");

    let push_routes = Router::new()
        .route("/send-test-push", post(notifications::send_test_push))
        .route("/send-menu-push", post(notifications::send_menu_push))
        .layer(GovernorLayer::new(push_conf))
        .layer(from_fn_with_state(push_scope, log_rate_limit_events));

    let api_routes = Router::new()
        .route("/", get(catalog::root))
        .route("/school-info", get(catalog::school_info))
        .route("/contact", get(catalog::contact))
        .route("/news", get(catalog::list_news))
        .route("/news/{id}", get(catalog::get_news))
        .route("/courses", get(catalog::list_courses))
        .route("/courses/{course_type}", get(catalog::courses_by_type))
        .route("/staff", get(catalog::list_staff))
        .route("/events", get(catalog::list_events))
        .route("/quick-links", get(catalog::list_quick_links))
        .route("/teachers", get(catalog::list_teachers))
        .route("/teachers/search", get(catalog::search_teachers))
        .route("/menu", get(catalog::get_menu))
        .route("/gallery", get(catalog::list_gallery))
        .route("/gallery/{id}", get(catalog::get_album))
        .route("/campus", get(catalog::list_campus))
        .route("/campus/{id}", get(catalog::get_building))
        .route("/rooms/search", get(catalog::search_rooms))
        .route(
            "/register-token",
            post(notifications::register_token).layer(DefaultBodyLimit::max(REGISTER_BODY_LIMIT_BYTES)),
        )
        .layer(GovernorLayer::new(Arc::clone(&standard_conf)))
        .layer(from_fn_with_state(standard_scope.clone(), log_rate_limit_events));

    // A "/" route nested under "/api" only answers "/api"; the trailing-slash form is mounted here.
    let api_root = Router::new()
        .route("/api/", get(catalog::root))
        .layer(GovernorLayer::new(standard_conf))
        .layer(from_fn_with_state(standard_scope, log_rate_limit_events));

    Router::new()
        .route("/openapi.yaml", get(docs::openapi_yaml))
        .merge(api_root)
        .nest("/api", api_routes.merge(push_routes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &tracing::Span| {
                        let status = response.status();
                        span.record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid))
        .with_state(state)
}

pub fn mgmt_router(state: MgmtState) -> Router {
    Router::new().route("/livez", get(health::livez)).route("/readyz", get(health::readyz)).with_state(state)
}
