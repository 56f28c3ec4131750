mod common;

use axum::http::StatusCode;
use common::{get, post_json, send, RunningService};
use microshop::lifecycle::ServiceSystem;
use serde_json::json;

#[tokio::test]
async fn test_register_users_in_sequence() {
    let system = ServiceSystem::user();

    let (status, body) = send(system.router(), post_json("/user", r#"{"username":"alice"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"user_id": "user1", "username": "alice"}));

    let (status, body) = send(system.router(), post_json("/user", r#"{"username":"bob"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"user_id": "user2", "username": "bob"}));
}

#[tokio::test]
async fn test_missing_username_is_rejected() {
    let system = ServiceSystem::user();

    for payload in [r#"{}"#, r#"{"username":""}"#, r#"{"name":"alice"}"#, "not json"] {
        let (status, body) = send(system.router(), post_json("/user", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body, json!({"error": "Username is required"}));
    }

    // Rejected registrations do not consume ids
    let (_, body) = send(system.router(), post_json("/user", r#"{"username":"carol"}"#)).await;
    assert_eq!(body["user_id"], "user1");
}

#[tokio::test]
async fn test_lookup_by_id() {
    let system = ServiceSystem::user();
    send(system.router(), post_json("/user", r#"{"username":"alice"}"#)).await;

    let (status, body) = send(system.router(), get("/user/user1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": "user1", "username": "alice"}));

    let (status, body) = send(system.router(), get("/user/userX")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_health() {
    let system = ServiceSystem::user();

    let (status, body) = send(system.router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP"}));
}

#[tokio::test]
async fn test_served_over_http_and_shut_down_gracefully() {
    let service = RunningService::start(ServiceSystem::user()).await;
    let http = reqwest::Client::new();

    let created = http
        .post(format!("{}/user", service.url()))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), reqwest::StatusCode::CREATED);

    let fetched = http
        .get(format!("{}/user/user1", service.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(fetched.status(), reqwest::StatusCode::OK);

    drop(http);
    service.stop().await.expect("service should stop cleanly");
}
