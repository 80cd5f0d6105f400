//! Integration tests for the HTTP API.
//!
//! Tests drive the `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test gets its own temp data directory,
//! so file-store state never leaks between tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use roadrace::router::build_router;
use roadrace::state::AppState;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let state = Arc::new(AppState::new(dir.path()));
    (dir, build_router(state))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn add_competitor(router: &Router, name: &str) -> Value {
    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/competitors?name={name}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_to_json(response.into_body()).await
}

// =========================================================================
// Registry
// =========================================================================

#[tokio::test]
async fn test_registry_starts_empty() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(Request::get("/competitors").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_add_competitor_assigns_sequential_ids() {
    let (_dir, router) = test_app();

    let first = add_competitor(&router, "Ana").await;
    let second = add_competitor(&router, "Luis").await;
    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
    assert_eq!(second["name"], "Luis");

    let response = router
        .oneshot(Request::get("/competitors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_add_competitor_requires_name() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(Request::post("/competitors").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_competitor() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;

    let response = router
        .clone()
        .oneshot(
            Request::put("/competitors/1?name=Maria")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Maria");

    let response = router
        .oneshot(Request::get("/competitors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json[0]["name"], "Maria");
}

#[tokio::test]
async fn test_rename_unknown_competitor_returns_404() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(
            Request::put("/competitors/99?name=Nadie")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_competitor_removes_record() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;
    add_competitor(&router, "Luis").await;

    let response = router
        .clone()
        .oneshot(
            Request::delete("/competitors/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(Request::get("/competitors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 2);
}

#[tokio::test]
async fn test_delete_unknown_competitor_is_a_no_op() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(
            Request::delete("/competitors/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// =========================================================================
// Simulation
// =========================================================================

#[tokio::test]
async fn test_simulate_requires_count_and_distance() {
    let (_dir, router) = test_app();

    for uri in ["/simulate", "/simulate?count=2", "/simulate?distance=10"] {
        let response = router
            .clone()
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_simulate_rejects_zero_count() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;

    let response = router
        .oneshot(
            Request::post("/simulate?count=0&distance=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_simulate_rejects_count_beyond_registry() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;

    let response = router
        .oneshot(
            Request::post("/simulate?count=5&distance=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_simulate_rejects_non_positive_distance() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;

    for uri in [
        "/simulate?count=1&distance=0",
        "/simulate?count=1&distance=-4",
    ] {
        let response = router
            .clone()
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_simulate_returns_ranked_result() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;
    add_competitor(&router, "Luis").await;
    add_competitor(&router, "Marta").await;

    let response = router
        .oneshot(
            Request::post("/simulate?count=2&distance=12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    // Fastest possible speed is 10, slowest is 1.
    let hours = json["hours"].as_u64().unwrap();
    assert!((2..=12).contains(&hours));

    let positions = json["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(json["winner"], positions[0]);

    let first = positions[0]["position"].as_f64().unwrap();
    let second = positions[1]["position"].as_f64().unwrap();
    assert!(first >= second);
    for entry in positions {
        let position = entry["position"].as_f64().unwrap();
        assert!(position > 0.0 && position <= 12.0);
        let speed = entry["speed"].as_u64().unwrap();
        assert!((1..=10).contains(&speed));
    }
}

#[tokio::test]
async fn test_simulate_persists_history_and_summary() {
    let (_dir, router) = test_app();
    add_competitor(&router, "Ana").await;
    add_competitor(&router, "Luis").await;

    let response = router
        .clone()
        .oneshot(
            Request::post("/simulate?count=2&distance=9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let race = body_to_json(response.into_body()).await;
    let hours = race["hours"].as_u64().unwrap();

    let response = router
        .clone()
        .oneshot(Request::get("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let history = body_to_json(response.into_body()).await;
    assert_eq!(history.as_array().unwrap().len() as u64, hours);
    assert_eq!(history[0]["hour"], 1);
    assert_eq!(history[0]["positions"].as_array().unwrap().len(), 2);

    let response = router
        .oneshot(Request::get("/race").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_to_json(response.into_body()).await;
    assert_eq!(summary["totalDistance"], 9.0);
    assert_eq!(summary["hours"].as_u64().unwrap(), hours);
    assert_eq!(summary["winner"], race["winner"]);
}

// =========================================================================
// Reads before the first race
// =========================================================================

#[tokio::test]
async fn test_history_empty_before_first_race() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(Request::get("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_race_summary_missing_before_first_race() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(Request::get("/race").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let (_dir, router) = test_app();

    let response = router
        .oneshot(Request::get("/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
