//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! The inference service is a stub started by each test.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

async fn results_for(server: &TestServer, file_name: &str) -> Vec<StoredResult> {
    let response = server.get("/results").await.expect("Request failed");
    let results: Vec<StoredResult> = assert_json(response, StatusCode::OK).await.unwrap();
    results
        .into_iter()
        .filter(|r| r.file_name.as_deref() == Some(file_name))
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Analyze Tests
// ============================================================================

#[tokio::test]
async fn test_analyze_inline_image_is_stored() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = InlineImageBody::unique();

    let response = server.post("/analyze", &request).await.unwrap();
    let single: SingleAnalysis = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(single.selected_product, "product1");
    assert_eq!(single.analysis.dominant_emotion, "happy");
    assert_eq!(single.analysis.emotions["happy"], 0.9);

    let stored = results_for(&server, &request.file_name).await;
    assert_eq!(stored.len(), 1);
    let result = &stored[0];
    assert_eq!(result.dominant_emotion, "happy");
    assert!(result.bucket.is_none());
    assert!(!result.created_at.is_empty());
    assert_eq!(result.emotions.len(), 2);
    assert!(result.emotions.iter().all(|e| e.result_id == result.id));
    let neutral = result
        .emotions
        .iter()
        .find(|e| e.emotion == "neutral")
        .unwrap();
    assert_eq!(neutral.score, 0.1);
}

#[tokio::test]
async fn test_analyze_stored_image_keeps_object_reference() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = StoredImageBody::unique();

    let response = server.post("/analyze", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/results").await.unwrap();
    let results: Vec<StoredResult> = assert_json(response, StatusCode::OK).await.unwrap();
    let stored: Vec<_> = results
        .iter()
        .filter(|r| r.image_key.as_deref() == Some(request.image_key.as_str()))
        .collect();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].bucket.as_deref(), Some("uploads"));
    assert!(stored[0].file_name.is_none());
}

#[tokio::test]
async fn test_analyze_group_stores_one_record_per_face() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = InlineImageBody::group();

    let response = server.post("/analyze", &request).await.unwrap();
    let faces: Vec<AnalysisView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0].dominant_emotion, "happy");
    assert_eq!(faces[1].dominant_emotion, "sad");

    let stored = results_for(&server, &request.file_name).await;
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].id, stored[1].id);
    let emotion_ids: std::collections::HashSet<_> = stored
        .iter()
        .flat_map(|r| r.emotions.iter().map(|e| e.id))
        .collect();
    assert_eq!(emotion_ids.len(), 4);
}

#[tokio::test]
async fn test_analyze_upstream_failure_stores_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = InlineImageBody::overloaded();

    let response = server.post("/analyze", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(error.code, "INFERENCE_ERROR");
    assert!(error.error.contains("model overloaded"));

    assert!(results_for(&server, &request.file_name).await.is_empty());
}

#[tokio::test]
async fn test_analyze_rejects_empty_image() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = InlineImageBody::unique();
    request.image_data = String::new();

    let response = server.post("/analyze", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");
    assert!(error.details.is_some());

    assert!(results_for(&server, &request.file_name).await.is_empty());
}

#[tokio::test]
async fn test_results_newest_first() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = InlineImageBody::unique();
    let second = InlineImageBody::unique();

    for request in [&first, &second] {
        let response = server.post("/analyze", request).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/results").await.unwrap();
    let results: Vec<StoredResult> = assert_json(response, StatusCode::OK).await.unwrap();
    let position = |name: &str| {
        results
            .iter()
            .position(|r| r.file_name.as_deref() == Some(name))
            .unwrap()
    };
    assert!(position(&second.file_name) < position(&first.file_name));
}

// ============================================================================
// Detect Tests
// ============================================================================

#[tokio::test]
async fn test_detect_logo() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/detect", &json!({"image_data": LOGO_MARKER}))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"logo_detected": true}));

    let response = server
        .post("/detect", &json!({"image": "plain-image"}))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"logo_detected": false}));
}

#[tokio::test]
async fn test_detect_rejects_empty_image() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/detect", &json!({"image_data": ""}))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");
}
