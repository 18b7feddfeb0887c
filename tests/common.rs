#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub, missing_debug_implementations)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use pataky_server::AppBuilder;
use pataky_server::adapters::push::PushGateway;
use pataky_server::api::{MgmtState, app_router, mgmt_router};
use pataky_server::config::{Config, LogFormat, PushConfig, RateLimitConfig, ServerConfig, TelemetryConfig};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tokio::net::TcpListener;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("pataky_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

pub const GATEWAY_PATH: &str = "/--/api/v2/push/send";

pub fn get_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            mgmt_port: 0,
            shutdown_timeout_secs: 1,
            request_timeout_secs: 30,
            trusted_proxies: vec!["127.0.0.1/32".parse().unwrap()],
        },
        push: PushConfig {
            // Nothing listens here; tests that broadcast point this at a FakeGateway.
            gateway_url: "http://127.0.0.1:9/--/api/v2/push/send".to_string(),
            access_token: None,
            timeout_secs: 2,
            sound: "default".to_string(),
            menu_utc_offset_hours: 1,
        },
        rate_limit: RateLimitConfig { per_second: 10_000, burst: 10_000, push_per_second: 10_000, push_burst: 10_000 },
        telemetry: TelemetryConfig { log_format: LogFormat::Text, otlp_endpoint: None },
    }
}

pub struct TestApp {
    pub server_url: String,
    pub mgmt_url: String,
    pub client: reqwest::Client,
    pub config: Config,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(get_test_config()).await
    }

    pub async fn spawn_with_config(config: Config) -> Self {
        Self::start(config, None).await
    }

    pub async fn spawn_with_gateway(config: Config, gateway: Arc<dyn PushGateway>) -> Self {
        Self::start(config, Some(gateway)).await
    }

    async fn start(config: Config, gateway: Option<Arc<dyn PushGateway>>) -> Self {
        setup_tracing();

        let mut builder = AppBuilder::new(config.clone());
        if let Some(gateway) = gateway {
            builder = builder.with_push_gateway(gateway);
        }
        let app = builder.build().unwrap();

        let router = app_router(&config, app.services);
        let mgmt = mgmt_router(MgmtState { health_service: app.health_service });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mgmt_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server_url = format!("http://{}", listener.local_addr().unwrap());
        let mgmt_url = format!("http://{}", mgmt_listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>()).await.unwrap();
        });
        tokio::spawn(async move {
            axum::serve(mgmt_listener, mgmt.into_make_service_with_connect_info::<SocketAddr>()).await.unwrap();
        });

        Self { server_url, mgmt_url, client: reqwest::Client::new(), config }
    }

    pub fn api(&self, path: &str) -> String {
        format!("{}/api{}", self.server_url, path)
    }

    pub async fn register_token(&self, token: &str) -> reqwest::Response {
        self.client.post(self.api("/register-token")).json(&json!({ "token": token })).send().await.unwrap()
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let resp = self.client.get(self.api(path)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
        resp.json().await.unwrap()
    }

    pub async fn registered_tokens(&self) -> u64 {
        let body: Value = self.client.get(format!("{}/readyz", self.mgmt_url)).send().await.unwrap().json().await.unwrap();
        body["registered_tokens"].as_u64().unwrap()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum GatewayBehavior {
    Accept,
    Fail(StatusCode),
    Hang(Duration),
}

#[derive(Clone, Debug)]
pub struct ReceivedBatch {
    pub body: Value,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct GatewayState {
    behavior: GatewayBehavior,
    received: Arc<Mutex<Vec<ReceivedBatch>>>,
}

/// A stand-in push gateway that records every batch it receives.
pub struct FakeGateway {
    pub url: String,
    received: Arc<Mutex<Vec<ReceivedBatch>>>,
}

impl FakeGateway {
    pub async fn spawn(behavior: GatewayBehavior) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = GatewayState { behavior, received: Arc::clone(&received) };

        let router = Router::new().route(GATEWAY_PATH, post(receive_batch)).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}{GATEWAY_PATH}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { url, received }
    }

    pub fn batches(&self) -> Vec<ReceivedBatch> {
        self.received.lock().unwrap().clone()
    }

    /// A test config whose push client talks to this gateway.
    pub fn config(&self) -> Config {
        let mut config = get_test_config();
        config.push.gateway_url.clone_from(&self.url);
        config
    }
}

async fn receive_batch(State(state): State<GatewayState>, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let authorization = headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_owned);
    let entries = body.as_array().map_or(0, Vec::len);
    state.received.lock().unwrap().push(ReceivedBatch { body, authorization });

    match state.behavior {
        GatewayBehavior::Accept => {
            let tickets: Vec<Value> = (0..entries).map(|i| json!({ "status": "ok", "id": format!("ticket-{i}") })).collect();
            (StatusCode::OK, Json(json!({ "data": tickets })))
        }
        GatewayBehavior::Fail(status) => (status, Json(json!({ "errors": [{ "code": "INTERNAL", "message": "boom" }] }))),
        GatewayBehavior::Hang(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, Json(json!({ "data": [] })))
        }
    }
}
