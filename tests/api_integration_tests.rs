//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::{Body, Bytes},
    http::{Request, Response, StatusCode},
    Router,
};
use lrucached::{create_router, AppState, LruCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(capacity: u64) -> Router {
    create_router(AppState::new(LruCache::with_capacity(capacity)))
}

async fn send(app: &Router, method: &str, uri: &str, body: impl Into<Body>) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

async fn body_to_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// == PUT Tests ==

#[tokio::test]
async fn test_put_creates_entry() {
    let app = create_test_app(1_000);

    let response = send(&app, "PUT", "/api/v1/cached/test_key", "test_value").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response).await;
    assert_eq!(json["key"], "test_key");
    assert_eq!(json["size"], 10);
}

#[tokio::test]
async fn test_put_binary_payload_round_trips() {
    let app = create_test_app(1_000);
    let payload: Vec<u8> = (0..=255u8).collect();

    let response = send(&app, "PUT", "/api/v1/cached/blob", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "GET", "/api/v1/cached/blob", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/octet-stream"
    );
    assert_eq!(body_bytes(response).await.as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_put_oversized_is_rejected() {
    let app = create_test_app(16);

    let response = send(&app, "PUT", "/api/v1/cached/big", vec![0u8; 16]).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_to_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("16"));

    let response = send(&app, "GET", "/api/v1/cached/big", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_overwrites_value() {
    let app = create_test_app(1_000);

    send(&app, "PUT", "/api/v1/cached/foo", "bar").await;
    send(&app, "PUT", "/api/v1/cached/foo", "tar").await;

    let response = send(&app, "GET", "/api/v1/cached/foo", Body::empty()).await;
    assert_eq!(body_bytes(response).await.as_ref(), b"tar");

    let json = body_to_json(send(&app, "GET", "/api/v1/stat", Body::empty()).await).await;
    assert_eq!(json["size"], 3);
    assert_eq!(json["objects"], 1);
}

#[tokio::test]
async fn test_put_body_over_capacity_is_json_and_counted() {
    let app = create_test_app(100);

    let response = send(&app, "PUT", "/api/v1/cached/huge", vec![0u8; 101]).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_to_json(response).await;
    assert!(json["error"].is_string());

    let json = body_to_json(send(&app, "GET", "/api/v1/stat", Body::empty()).await).await;
    assert_eq!(json["rejected"].as_u64().unwrap(), 1);
    assert_eq!(json["objects"].as_u64().unwrap(), 0);
}

// == GET Tests ==

#[tokio::test]
async fn test_get_not_found() {
    let app = create_test_app(1_000);

    let response = send(&app, "GET", "/api/v1/cached/nonexistent_key", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_keys_may_contain_slashes() {
    let app = create_test_app(1_000);

    send(&app, "PUT", "/api/v1/cached/users/42/profile", "alice").await;

    let response = send(&app, "GET", "/api/v1/cached/users/42/profile", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await.as_ref(), b"alice");

    let response = send(&app, "GET", "/api/v1/cached/users/42", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_key_is_bad_request() {
    let app = create_test_app(1_000);

    for uri in ["/api/v1/cached", "/api/v1/cached/"] {
        for method in ["PUT", "GET", "DELETE"] {
            let response = send(&app, method, uri, Body::empty()).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
            let json = body_to_json(response).await;
            assert!(json.get("error").is_some());
        }
    }
}

// == DELETE Tests ==

#[tokio::test]
async fn test_delete_removes_entry() {
    let app = create_test_app(1_000);

    send(&app, "PUT", "/api/v1/cached/delete_key", "delete_value").await;

    let response = send(&app, "DELETE", "/api/v1/cached/delete_key", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/api/v1/cached/delete_key", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_key_is_ok() {
    let app = create_test_app(1_000);

    let response = send(&app, "DELETE", "/api/v1/cached/nonexistent_key", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
}

// == Eviction Tests ==

#[tokio::test]
async fn test_lru_eviction_over_http() {
    let app = create_test_app(100);

    send(&app, "PUT", "/api/v1/cached/A", vec![b'a'; 50]).await;
    send(&app, "PUT", "/api/v1/cached/B", vec![b'b'; 50]).await;
    send(&app, "PUT", "/api/v1/cached/C", vec![b'c'; 10]).await;

    let status_of = |key: &'static str| {
        let app = app.clone();
        async move {
            send(&app, "GET", &format!("/api/v1/cached/{key}"), Body::empty())
                .await
                .status()
        }
    };

    assert_eq!(status_of("A").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of("B").await, StatusCode::OK);
    assert_eq!(status_of("C").await, StatusCode::OK);
}

#[tokio::test]
async fn test_get_protects_from_eviction() {
    let app = create_test_app(100);

    send(&app, "PUT", "/api/v1/cached/A", vec![0u8; 40]).await;
    send(&app, "PUT", "/api/v1/cached/B", vec![0u8; 40]).await;
    send(&app, "GET", "/api/v1/cached/A", Body::empty()).await;
    send(&app, "PUT", "/api/v1/cached/C", vec![0u8; 40]).await;

    let response = send(&app, "GET", "/api/v1/cached/A", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, "GET", "/api/v1/cached/B", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Method Tests ==

#[tokio::test]
async fn test_unsupported_methods() {
    let app = create_test_app(1_000);

    for (method, uri) in [
        ("POST", "/api/v1/cached"),
        ("PATCH", "/api/v1/cached/key"),
        ("POST", "/api/v1/cached/key"),
        ("DELETE", "/api/v1/stat"),
    ] {
        let response = send(&app, method, uri, Body::empty()).await;
        assert_eq!(
            response.status(),
            StatusCode::NOT_IMPLEMENTED,
            "{method} {uri}"
        );
    }
}

// == STAT Endpoint Tests ==

#[tokio::test]
async fn test_stat_endpoint() {
    let app = create_test_app(1_000);

    send(&app, "PUT", "/api/v1/cached/stats_key", "stats_value").await;
    send(&app, "GET", "/api/v1/cached/stats_key", Body::empty()).await;
    send(&app, "GET", "/api/v1/cached/nonexistent", Body::empty()).await;

    let response = send(&app, "GET", "/api/v1/stat", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;

    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["objects"].as_u64().unwrap(), 1);
    assert_eq!(json["size"].as_u64().unwrap(), 11);
    assert_eq!(json["capacity"].as_u64().unwrap(), 1_000);
    assert!(json.get("hit_rate").is_some());
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(1_000);

    let response = send(&app, "GET", "/health", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Concurrency Tests ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_respect_capacity() {
    let app = create_test_app(500);

    let mut handles = Vec::new();
    for worker in 0..16u32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..50u32 {
                let key = format!("/api/v1/cached/key-{}", (worker + i) % 10);
                let len = ((worker * 31 + i * 7) % 90) as usize;
                match i % 3 {
                    0 => {
                        let response = send(&app, "PUT", &key, vec![0u8; len]).await;
                        assert_eq!(response.status(), StatusCode::CREATED);
                    }
                    1 => {
                        let status = send(&app, "GET", &key, Body::empty()).await.status();
                        assert!(status == StatusCode::OK || status == StatusCode::NOT_FOUND);
                    }
                    _ => {
                        let response = send(&app, "DELETE", &key, Body::empty()).await;
                        assert_eq!(response.status(), StatusCode::OK);
                    }
                }
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let json = body_to_json(send(&app, "GET", "/api/v1/stat", Body::empty()).await).await;
    assert!(json["size"].as_u64().unwrap() <= 500);
    assert!(json["objects"].as_u64().unwrap() <= 10);
}
