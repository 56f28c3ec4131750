use microshop::model::OrderRequest;
use microshop::orchestrator::OrderOrchestrator;
use microshop::order_actor::OrderError;
use microshop::upstream::{HttpLookup, LookupError, ResourceLookup, Upstream};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

fn lookup(upstream: Upstream, base_url: &str) -> HttpLookup {
    HttpLookup::new(upstream, base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_existing_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user/user1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user_id":"user1","username":"alice"}"#)
        .create_async()
        .await;

    let users = lookup(Upstream::User, &server.url());
    assert_eq!(users.lookup("user1").await, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/product/prod999")
        .with_status(404)
        .with_body(r#"{"error":"Product not found"}"#)
        .create_async()
        .await;

    let products = lookup(Upstream::Product, &server.url());
    assert_eq!(products.lookup("prod999").await, Err(LookupError::NotFound));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/user/user1")
        .with_status(503)
        .create_async()
        .await;

    let users = lookup(Upstream::User, &server.url());
    let result = users.lookup("user1").await;
    assert!(matches!(result, Err(LookupError::Failed(_))), "{result:?}");
}

#[tokio::test]
async fn test_refused_connection_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let users = lookup(Upstream::User, &format!("http://{addr}"));
    let result = users.lookup("user1").await;
    assert!(matches!(result, Err(LookupError::Unavailable(_))), "{result:?}");
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = vec![];
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let users = HttpLookup::new(Upstream::User, &format!("http://{addr}"), Duration::from_millis(200))
        .unwrap();
    assert_eq!(users.lookup("user1").await, Err(LookupError::Timeout));
}

#[tokio::test]
async fn test_product_service_is_not_called_for_unknown_user() {
    let mut user_server = mockito::Server::new_async().await;
    let mut product_server = mockito::Server::new_async().await;
    let user_mock = user_server
        .mock("GET", "/user/userX")
        .with_status(404)
        .create_async()
        .await;
    let product_mock = product_server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (actor, orders) = microshop::order_actor::new();
    tokio::spawn(actor.run());
    let orchestrator = OrderOrchestrator::new(
        Arc::new(lookup(Upstream::User, &user_server.url())),
        Arc::new(lookup(Upstream::Product, &product_server.url())),
        orders,
    );

    let result = orchestrator
        .create_order(OrderRequest::new("userX", "prod123"))
        .await;

    assert_eq!(result, Err(OrderError::UserNotFound("userX".into())));
    user_mock.assert_async().await;
    product_mock.assert_async().await;
}
