//! Integration tests for the paste HTTP API.

use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use axum_test::TestServer;
use pastebin_service::{
    adapters::{rate_limiter::RateLimiter, repositories::InMemoryPasteRepository},
    application::services::paste_service::PasteService,
    create_router,
    domain::config::server::{BurnPolicy, RateLimitConfig},
    AppState,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

fn test_server_with(policy: BurnPolicy, rate_limit: RateLimitConfig) -> TestServer {
    let state = AppState {
        paste_service: PasteService::new(Arc::new(InMemoryPasteRepository::new()), policy),
        rate_limiter: RateLimiter::new(rate_limit),
    };
    TestServer::new(create_router(state, CorsLayer::permissive())).unwrap()
}

fn setup_test_server() -> TestServer {
    test_server_with(
        BurnPolicy::default(),
        RateLimitConfig {
            max_requests: 10_000,
            window: Duration::from_secs(900),
        },
    )
}

async fn create_paste(server: &TestServer, body: Value) -> String {
    let response = server.post("/api/pastes").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: Value = response.json();
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_paste_lifecycle() {
    let server = setup_test_server();

    let id = create_paste(
        &server,
        json!({
            "content": "Hello, World!",
            "language": "javascript"
        }),
    )
    .await;
    assert_eq!(id.len(), 8);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let get_response = server.get(&format!("/api/pastes/{}", id)).await;
    assert_eq!(get_response.status_code(), StatusCode::OK);
    let paste: Value = get_response.json();
    assert_eq!(paste["id"], id.as_str());
    assert_eq!(paste["content"], "Hello, World!");
    assert_eq!(paste["language"], "javascript");
    assert_eq!(paste["views"], 1);
    assert_eq!(paste["burnAfterRead"], false);
    assert_eq!(paste["isPrivate"], false);
    assert!(paste["expiresAt"].is_null());
    assert!(paste["createdAt"].is_string());

    let list: Value = server.get("/api/pastes").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);

    let delete_response = server.delete(&format!("/api/pastes/{}", id)).await;
    assert_eq!(delete_response.status_code(), StatusCode::OK);
    let deleted: Value = delete_response.json();
    assert_eq!(deleted["message"], "Paste deleted successfully");

    let get_deleted = server.get(&format!("/api/pastes/{}", id)).await;
    assert_eq!(get_deleted.status_code(), StatusCode::NOT_FOUND);

    let list: Value = server.get("/api/pastes").await.json();
    assert!(list.as_array().unwrap().is_empty());

    let delete_again = server.delete(&format!("/api/pastes/{}", id)).await;
    assert_eq!(delete_again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_language_defaults_to_plain() {
    let server = setup_test_server();
    let id = create_paste(&server, json!({ "content": "just text" })).await;

    let paste: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
    assert_eq!(paste["language"], "plain");
}

#[tokio::test]
async fn test_each_read_counts_one_view() {
    let server = setup_test_server();
    let id = create_paste(&server, json!({ "content": "counter" })).await;

    for expected in 1..=3 {
        let paste: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
        assert_eq!(paste["views"], expected);
    }

    // listing does not count as a view
    let list: Value = server.get("/api/pastes").await.json();
    assert_eq!(list[0]["views"], 3);
}

#[tokio::test]
async fn test_already_expired_paste_is_unreadable_and_unlisted() {
    let server = setup_test_server();
    let id = create_paste(&server, json!({ "content": "gone", "expiresIn": 0 })).await;

    let response = server.get(&format!("/api/pastes/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let list: Value = server.get("/api/pastes").await.json();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_future_expiry_is_reported() {
    let server = setup_test_server();
    let id = create_paste(&server, json!({ "content": "soon", "expiresIn": 300000 })).await;

    let paste: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
    assert!(paste["expiresAt"].is_string());

    let list: Value = server.get("/api/pastes").await.json();
    assert!(list[0]["expiresAt"].is_string());
}

#[tokio::test]
async fn test_burn_after_read_is_served_twice() {
    let server = setup_test_server();
    let id = create_paste(&server, json!({ "content": "hello", "burnAfterRead": true })).await;

    let first: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
    assert_eq!(first["content"], "hello");
    assert_eq!(first["views"], 1);
    assert_eq!(first["deleted"], false);

    let list: Value = server.get("/api/pastes").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);

    let second = server.get(&format!("/api/pastes/{}", id)).await;
    assert_eq!(second.status_code(), StatusCode::OK);
    let second: Value = second.json();
    assert_eq!(second["content"], "hello");
    assert_eq!(second["views"], 2);
    assert_eq!(second["deleted"], true);

    let list: Value = server.get("/api/pastes").await.json();
    assert!(list.as_array().unwrap().is_empty());

    let third = server.get(&format!("/api/pastes/{}", id)).await;
    assert_eq!(third.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_first_read_policy_burns_on_first_read() {
    let server = test_server_with(
        BurnPolicy::FirstRead,
        RateLimitConfig {
            max_requests: 100,
            window: Duration::from_secs(900),
        },
    );
    let id = create_paste(&server, json!({ "content": "once", "burnAfterRead": true })).await;

    let first: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
    assert_eq!(first["content"], "once");
    assert_eq!(first["views"], 1);

    let second = server.get(&format!("/api/pastes/{}", id)).await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_truncates_long_content() {
    let server = setup_test_server();
    let long = "x".repeat(150);
    let exact = "y".repeat(100);
    create_paste(&server, json!({ "content": long })).await;
    create_paste(&server, json!({ "content": exact })).await;

    let list: Value = server.get("/api/pastes").await.json();
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let long_entry = entries
        .iter()
        .find(|entry| entry["content"].as_str().unwrap().starts_with('x'))
        .unwrap();
    let content = long_entry["content"].as_str().unwrap();
    assert_eq!(content.len(), 103);
    assert!(content.ends_with("..."));
    assert_eq!(long_entry["truncated"], true);

    let exact_entry = entries
        .iter()
        .find(|entry| entry["content"].as_str().unwrap().starts_with('y'))
        .unwrap();
    assert_eq!(exact_entry["content"].as_str().unwrap().len(), 100);
    assert_eq!(exact_entry["truncated"], false);

    // reads still return the full content
    let id = long_entry["id"].as_str().unwrap();
    let paste: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
    assert_eq!(paste["content"].as_str().unwrap().len(), 150);
}

#[tokio::test]
async fn test_listing_is_capped_and_newest_first() {
    let server = setup_test_server();
    let mut ids = Vec::new();
    for i in 0..105 {
        ids.push(create_paste(&server, json!({ "content": format!("paste {}", i) })).await);
    }

    let list: Value = server.get("/api/pastes").await.json();
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 100);
    assert_eq!(entries[0]["id"], ids[104].as_str());
    assert_eq!(entries[0]["content"], "paste 104");
    assert!(entries.iter().all(|entry| entry["id"] != ids[0].as_str()));
}

#[tokio::test]
async fn test_private_pastes_are_listed_and_readable() {
    let server = setup_test_server();
    let id = create_paste(&server, json!({ "content": "top secret", "isPrivate": true })).await;

    let list: Value = server.get("/api/pastes").await.json();
    assert_eq!(list[0]["isPrivate"], true);
    assert_eq!(list[0]["content"], "top secret");

    let paste: Value = server.get(&format!("/api/pastes/{}", id)).await.json();
    assert_eq!(paste["isPrivate"], true);
    assert_eq!(paste["content"], "top secret");
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let server = setup_test_server();

    let response = server.post("/api/pastes").json(&json!({ "content": "" })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Bad request");

    let response = server.post("/api/pastes").json(&json!({ "language": "python" })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let list: Value = server.get("/api/pastes").await.json();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_a_client_error() {
    let server = setup_test_server();
    let response = server.post("/api/pastes").text("content=hello").await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_unknown_paste_is_not_found() {
    let server = setup_test_server();

    let response = server.get("/api/pastes/deadbeef").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Paste not found");

    let response = server.delete("/api/pastes/deadbeef").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_limit_applies_to_all_routes() {
    let server = test_server_with(
        BurnPolicy::default(),
        RateLimitConfig {
            max_requests: 3,
            window: Duration::from_secs(900),
        },
    );

    let first = server.get("/api/pastes").await;
    assert_eq!(first.status_code(), StatusCode::OK);
    first.assert_header("ratelimit-limit", "3");
    first.assert_header("ratelimit-remaining", "2");

    assert_eq!(
        server.get("/api/pastes/deadbeef").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server.get("/api/health").await.status_code(),
        StatusCode::OK
    );

    let limited = server
        .post("/api/pastes")
        .json(&json!({ "content": "blocked" }))
        .await;
    assert_eq!(limited.status_code(), StatusCode::TOO_MANY_REQUESTS);
    limited.assert_contains_header("retry-after");
    let body: Value = limited.json();
    assert_eq!(body["error"], "Too many requests, please try again later.");

    assert_eq!(
        server.get("/api/pastes").await.status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test]
async fn test_health_reports_database_status() {
    let server = setup_test_server();
    let response = server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let health: Value = response.json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "ok");
    assert_eq!(health["burnPolicy"], "second-read");
    assert!(health["metrics"]["memoryTotalBytes"].is_number());
}
