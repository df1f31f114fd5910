//! Test helpers for integration tests
//!
//! Provides the stub inference service, the test server and response
//! assertions.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::{http::StatusCode as AxumStatus, routing::post, Json, Router};
use emotion_api::{create_app, create_app_state};
use emotion_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{GROUP_MARKER, LOGO_MARKER, OVERLOADED_MARKER};

/// Stub of the inference service
///
/// Answers are keyed on the request: a file name containing
/// [`OVERLOADED_MARKER`] fails with 500, one containing [`GROUP_MARKER`]
/// yields two faces in a `results` envelope, anything else one face in the
/// raw `emotion` naming.
pub struct StubInference {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl StubInference {
    pub async fn start() -> Result<Self> {
        let app = Router::new()
            .route("/analyze", post(stub_analyze))
            .route("/detect", post(stub_detect));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn stub_analyze(Json(body): Json<Value>) -> (AxumStatus, Json<Value>) {
    let name = body["file_name"]
        .as_str()
        .or_else(|| body["image_key"].as_str())
        .unwrap_or_default();

    if name.contains(OVERLOADED_MARKER) {
        return (
            AxumStatus::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "model overloaded"})),
        );
    }

    if name.contains(GROUP_MARKER) {
        return (
            AxumStatus::OK,
            Json(json!({"results": [
                {"dominant_emotion": "happy", "emotions": {"happy": 0.8, "neutral": 0.2}},
                {"dominant_emotion": "sad", "emotions": {"sad": 0.6, "fear": 0.4}}
            ]})),
        );
    }

    (
        AxumStatus::OK,
        Json(json!({"dominant_emotion": "happy", "emotion": {"happy": 0.9, "neutral": 0.1}})),
    )
}

async fn stub_detect(Json(body): Json<Value>) -> Json<Value> {
    let image = body["image_data"].as_str().unwrap_or_default();
    Json(json!({"logo_detected": image == LOGO_MARKER}))
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _inference: StubInference,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the server against `DATABASE_URL` and a fresh stub inference service
    pub async fn start() -> Result<Self> {
        let inference = StubInference::start().await?;
        let config = test_config(&inference.base_url())?;

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _inference: inference,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

/// Configuration from the environment, pointed at the stub inference service
pub fn test_config(inference_url: &str) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    AppConfig::from_lookup(|key| match key {
        "INFERENCE_SERVICE_URL" => Some(inference_url.to_string()),
        "PYTHON_SERVICE_URL" => None,
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
