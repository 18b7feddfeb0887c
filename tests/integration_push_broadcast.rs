#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, missing_debug_implementations, unreachable_pub)]
use async_trait::async_trait;
use common::{FakeGateway, GatewayBehavior, TestApp};
use pataky_server::adapters::push::{PushError, PushGateway};
use pataky_server::domain::notification::PushEnvelope;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod common;

#[tokio::test]
async fn test_test_push_with_no_tokens_skips_gateway() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Accept).await;
    let app = TestApp::spawn_with_config(gateway.config()).await;

    let resp = app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "no recipients");
    assert!(gateway.batches().is_empty());
}

#[tokio::test]
async fn test_test_push_sends_one_batch_to_all_tokens() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Accept).await;
    let app = TestApp::spawn_with_config(gateway.config()).await;
    app.register_token("tokA").await;
    app.register_token("tokB").await;

    let resp = app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let batches = gateway.batches();
    assert_eq!(batches.len(), 1);
    let entries = batches[0].body.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let mut recipients: Vec<&str> = entries.iter().map(|e| e["to"].as_str().unwrap()).collect();
    recipients.sort_unstable();
    assert_eq!(recipients, vec!["tokA", "tokB"]);
    for entry in entries {
        assert_eq!(entry["body"], "Működik az értesítés! 🚀");
        assert_eq!(entry["title"], "Pataky Technikum");
        assert_eq!(entry["sound"], "default");
    }

    // The gateway acknowledgment is passed through untouched.
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["id"], "ticket-0");
}

#[tokio::test]
async fn test_menu_push_sends_one_batch() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Accept).await;
    let app = TestApp::spawn_with_config(gateway.config()).await;
    for token in ["tokA", "tokB", "tokC"] {
        app.register_token(token).await;
    }

    let resp = app.client.post(app.api("/send-menu-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let batches = gateway.batches();
    assert_eq!(batches.len(), 1);
    let entries = batches[0].body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[0]["title"].as_str().unwrap().starts_with("🍽️ Mai menü"));
    assert!(entries.iter().all(|e| e["body"] == entries[0]["body"]));
}

#[tokio::test]
async fn test_menu_push_with_no_tokens_skips_gateway() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Accept).await;
    let app = TestApp::spawn_with_config(gateway.config()).await;

    let resp = app.client.post(app.api("/send-menu-push")).send().await.unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "no recipients");
    assert!(gateway.batches().is_empty());
}

#[tokio::test]
async fn test_gateway_error_status_surfaces_as_bad_gateway() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Fail(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let app = TestApp::spawn_with_config(gateway.config()).await;
    app.register_token("tokA").await;

    let resp = app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("500"));
    assert_eq!(gateway.batches().len(), 1);
}

#[tokio::test]
async fn test_gateway_timeout_surfaces_as_bad_gateway() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Hang(Duration::from_secs(5))).await;
    let mut config = gateway.config();
    config.push.timeout_secs = 1;
    let app = TestApp::spawn_with_config(config).await;
    app.register_token("tokA").await;

    let started = std::time::Instant::now();
    let resp = app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_unreachable_gateway_surfaces_as_bad_gateway() {
    let app = TestApp::spawn().await;
    app.register_token("tokA").await;

    let resp = app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_access_token_is_sent_as_bearer() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Accept).await;
    let mut config = gateway.config();
    config.push.access_token = Some("expo-secret".to_string());
    let app = TestApp::spawn_with_config(config).await;
    app.register_token("tokA").await;

    app.client.post(app.api("/send-test-push")).send().await.unwrap();

    let batches = gateway.batches();
    assert_eq!(batches[0].authorization.as_deref(), Some("Bearer expo-secret"));
}

#[tokio::test]
async fn test_no_authorization_header_without_access_token() {
    let gateway = FakeGateway::spawn(GatewayBehavior::Accept).await;
    let app = TestApp::spawn_with_config(gateway.config()).await;
    app.register_token("tokA").await;

    app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert!(gateway.batches()[0].authorization.is_none());
}

/// Gateway injected through `AppBuilder::with_push_gateway`, bypassing HTTP to the provider.
#[derive(Debug, Default)]
struct InProcessGateway {
    batches: Mutex<Vec<Vec<PushEnvelope>>>,
    reject: bool,
}

#[async_trait]
impl PushGateway for InProcessGateway {
    async fn send_batch(&self, batch: &[PushEnvelope]) -> Result<Value, PushError> {
        self.batches.lock().unwrap().push(batch.to_vec());
        if self.reject {
            return Err(PushError::Status { status: 400, body: "DeviceNotRegistered".into() });
        }
        Ok(json!({ "data": [], "accepted": batch.len() }))
    }
}

#[tokio::test]
async fn test_injected_gateway_receives_broadcast() {
    let gateway = Arc::new(InProcessGateway::default());
    // The configured URL points at a closed port; only the injected gateway can succeed.
    let app = TestApp::spawn_with_gateway(common::get_test_config(), Arc::clone(&gateway) as Arc<dyn PushGateway>).await;
    app.register_token("tokA").await;
    app.register_token("tokB").await;

    let resp = app.client.post(app.api("/send-test-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["accepted"], 2);

    let batches = gateway.batches.lock().unwrap().clone();
    assert_eq!(batches.len(), 1);
    let recipients: Vec<&str> = batches[0].iter().map(|e| e.to.as_str()).collect();
    assert_eq!(recipients, vec!["tokA", "tokB"]);
}

#[tokio::test]
async fn test_injected_gateway_error_surfaces_as_bad_gateway() {
    let gateway = Arc::new(InProcessGateway { reject: true, ..InProcessGateway::default() });
    let app = TestApp::spawn_with_gateway(common::get_test_config(), Arc::clone(&gateway) as Arc<dyn PushGateway>).await;
    app.register_token("tokA").await;

    let resp = app.client.post(app.api("/send-menu-push")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(gateway.batches.lock().unwrap().len(), 1);
}
