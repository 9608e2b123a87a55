//! Integration tests exercising the HTTP surface over the wire.
//!
//! Each test assembles the real router with a fixed environment source,
//! binds it to an ephemeral port, and talks to it with reqwest. Using a
//! `StaticEnv` per test keeps assertions deterministic regardless of the
//! surrounding process environment, and lets tests simulate live
//! environment changes.

use std::net::SocketAddr;
use std::sync::Arc;

use hail::config::AppConfig;
use hail::env::StaticEnv;
use hail::routes::create_router;
use hail::state::AppState;

/// Start the service on an ephemeral port, returning its address.
async fn spawn_app(env: StaticEnv) -> SocketAddr {
    let state = AppState::new(AppConfig::default(), Arc::new(env));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    addr
}

async fn get_body(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::get(format!("http://{}{}", addr, path))
        .await
        .expect("Request failed");
    let status = response.status();
    let body = response.text().await.expect("Failed to read body");
    (status, body)
}

#[tokio::test]
async fn health_returns_up_and_running() {
    let addr = spawn_app(StaticEnv::new()).await;

    let (status, body) = get_body(addr, "/health").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Up and running");
}

#[tokio::test]
async fn health_is_unaffected_by_greeting_calls_and_configuration() {
    let env = StaticEnv::new()
        .with("GREETING", "Hello")
        .with("HOSTNAME", "node-7");
    let addr = spawn_app(env).await;

    get_body(addr, "/").await;
    get_body(addr, "/").await;

    let (status, body) = get_body(addr, "/health").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Up and running");
}

#[tokio::test]
async fn first_greeting_uses_defaults() {
    let addr = spawn_app(StaticEnv::new()).await;

    let (status, body) = get_body(addr, "/").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Hi (0, unknown)");
}

#[tokio::test]
async fn sequential_greetings_increment_the_count() {
    let addr = spawn_app(StaticEnv::new()).await;

    let (_, first) = get_body(addr, "/").await;
    let (_, second) = get_body(addr, "/").await;
    let (_, third) = get_body(addr, "/").await;

    assert_eq!(first, "Hi (0, unknown)");
    assert_eq!(second, "Hi (1, unknown)");
    assert_eq!(third, "Hi (2, unknown)");
}

#[tokio::test]
async fn greeting_value_is_taken_from_the_environment() {
    let addr = spawn_app(StaticEnv::new().with("GREETING", "Hello")).await;

    let (_, body) = get_body(addr, "/").await;
    assert!(
        body.starts_with("Hello ("),
        "expected Hello prefix, got {:?}",
        body
    );
}

#[tokio::test]
async fn hostname_is_embedded_in_the_greeting() {
    let addr = spawn_app(StaticEnv::new().with("HOSTNAME", "node-7")).await;

    let (_, body) = get_body(addr, "/").await;
    assert!(body.contains("node-7)"), "expected node-7, got {:?}", body);
}

#[tokio::test]
async fn repeated_greeting_requests_are_not_idempotent() {
    let addr = spawn_app(StaticEnv::new()).await;

    let (_, first) = get_body(addr, "/").await;
    let (_, second) = get_body(addr, "/").await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn greeting_changes_are_live_but_hostname_is_captured_once() {
    let env = StaticEnv::new()
        .with("GREETING", "Hi")
        .with("HOSTNAME", "node-1");
    let handle = env.clone();
    let addr = spawn_app(env).await;

    let (_, before) = get_body(addr, "/").await;
    assert_eq!(before, "Hi (0, node-1)");

    // The greeting is re-read per request; the hostname was captured at
    // startup and must not change.
    handle.set("GREETING", "Howdy");
    handle.set("HOSTNAME", "node-2");

    let (_, after) = get_body(addr, "/").await;
    assert_eq!(after, "Howdy (1, node-1)");
}

#[tokio::test]
async fn unknown_paths_return_not_found() {
    let addr = spawn_app(StaticEnv::new()).await;

    let (status, _) = get_body(addr, "/nope").await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_are_marked_not_cacheable() {
    let addr = spawn_app(StaticEnv::new()).await;

    let response = reqwest::get(format!("http://{}/", addr))
        .await
        .expect("Request failed");
    let cache_control = response
        .headers()
        .get(reqwest::header::CACHE_CONTROL)
        .expect("missing Cache-Control header");
    assert_eq!(cache_control, "no-store, max-age=0");
}
