mod common;

use axum::http::StatusCode;
use common::{get, post_json, send, RunningService};
use microshop::lifecycle::ServiceSystem;
use microshop::upstream::{HttpLookup, Upstream, UPSTREAM_TIMEOUT};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

// --- Harness ---

fn lookup(upstream: Upstream, base_url: &str, timeout: Duration) -> Arc<HttpLookup> {
    Arc::new(HttpLookup::new(upstream, base_url, timeout).unwrap())
}

fn order_system(user_url: &str, product_url: &str) -> ServiceSystem {
    ServiceSystem::order_with(
        lookup(Upstream::User, user_url, UPSTREAM_TIMEOUT),
        lookup(Upstream::Product, product_url, UPSTREAM_TIMEOUT),
    )
}

/// User and product services on ephemeral ports, with one registered user (`user1`).
async fn collaborators() -> (RunningService, RunningService) {
    let users = RunningService::start(ServiceSystem::user()).await;
    let products = RunningService::start(ServiceSystem::product()).await;

    let registered = reqwest::Client::new()
        .post(format!("{}/user", users.url()))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(registered.status(), reqwest::StatusCode::CREATED);

    (users, products)
}

/// An address nothing listens on.
async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A listener that accepts connections and never answers.
async fn silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = vec![];
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}

async fn place(system: &ServiceSystem, user_id: &str, product_id: &str) -> (StatusCode, Value) {
    let body = json!({"user_id": user_id, "product_id": product_id}).to_string();
    send(system.router(), post_json("/order", &body)).await
}

// --- Tests ---

#[tokio::test]
async fn test_order_is_placed_for_known_user_and_product() {
    let (users, products) = collaborators().await;
    let system = order_system(&users.url(), &products.url());

    let (status, body) = place(&system, "user1", "prod123").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"order_id": "ord1", "user_id": "user1", "product_id": "prod123", "status": "created"})
    );

    let (status, body) = place(&system, "user1", "prod456").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order_id"], "ord2");
}

#[tokio::test]
async fn test_unknown_user() {
    let (users, products) = collaborators().await;
    let system = order_system(&users.url(), &products.url());

    let (status, body) = place(&system, "userX", "prod123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User 'userX' not found"}));
}

#[tokio::test]
async fn test_unknown_product_does_not_consume_an_order_id() {
    let (users, products) = collaborators().await;
    let system = order_system(&users.url(), &products.url());

    let (status, body) = place(&system, "user1", "prod999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product 'prod999' not found"}));

    let (_, body) = place(&system, "user1", "prod789").await;
    assert_eq!(body["order_id"], "ord1");
}

#[tokio::test]
async fn test_missing_fields_and_unreadable_bodies() {
    // Collaborators are unreachable: validation must answer before any call is attempted.
    let nowhere = format!("http://{}", closed_address().await);
    let system = order_system(&nowhere, &nowhere);

    for payload in [
        r#"{"user_id":"user1"}"#,
        r#"{"product_id":"prod123"}"#,
        r#"{}"#,
        r#"{"user_id":"","product_id":"prod123"}"#,
        "not json",
    ] {
        let (status, body) = send(system.router(), post_json("/order", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body, json!({"error": "user_id and product_id are required"}));
    }
}

#[tokio::test]
async fn test_unreachable_user_service() {
    let products = RunningService::start(ServiceSystem::product()).await;
    let nowhere = format!("http://{}", closed_address().await);
    let system = order_system(&nowhere, &products.url());

    let (status, body) = place(&system, "user1", "prod123").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Could not connect to user service"}));
}

#[tokio::test]
async fn test_unreachable_product_service() {
    let (users, _products) = collaborators().await;
    let nowhere = format!("http://{}", closed_address().await);
    let system = order_system(&users.url(), &nowhere);

    let (status, body) = place(&system, "user1", "prod123").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Could not connect to product service"}));
}

#[tokio::test]
async fn test_user_service_timeout() {
    let silent = format!("http://{}", silent_server().await);
    let system = ServiceSystem::order_with(
        lookup(Upstream::User, &silent, Duration::from_millis(200)),
        lookup(Upstream::Product, &silent, Duration::from_millis(200)),
    );

    let (status, body) = place(&system, "user1", "prod123").await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, json!({"error": "User service timed out"}));
}

#[tokio::test]
async fn test_product_service_error_status() {
    let (users, _products) = collaborators().await;
    let mut failing = mockito::Server::new_async().await;
    failing
        .mock("GET", "/product/prod123")
        .with_status(500)
        .create_async()
        .await;
    let system = order_system(&users.url(), &failing.url());

    let (status, body) = place(&system, "user1", "prod123").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Failed to communicate with product service"}));
}

#[tokio::test]
async fn test_health() {
    let nowhere = format!("http://{}", closed_address().await);
    let system = order_system(&nowhere, &nowhere);

    let (status, body) = send(system.router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP"}));
}
