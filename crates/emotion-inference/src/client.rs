//! HTTP implementation of InferenceClient

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use emotion_core::error::InferenceError;
use emotion_core::traits::{InferenceClient, InferenceResult};
use emotion_core::value_objects::{AnalysisBatch, ImageLocator, LogoDetection};

use crate::config::InferenceClientConfig;
use crate::error::map_transport_error;
use crate::wire::{decode_analyses, decode_logo, DetectRequest};

const ANALYZE_PATH: &str = "analyze";
const DETECT_PATH: &str = "detect";

/// Inference client speaking JSON over HTTP
///
/// No retries: every failure is returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct HttpInferenceClient {
    http_client: Client,
    config: InferenceClientConfig,
}

impl HttpInferenceClient {
    /// Create a client with its own connection pool
    ///
    /// # Errors
    /// Returns `Unreachable` if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: InferenceClientConfig) -> InferenceResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                InferenceError::Unreachable(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// POST a JSON body and return the response text of a 200 answer
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> InferenceResult<String> {
        let url = self.config.endpoint(path);
        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| map_transport_error(&e))?;

        if status != StatusCode::OK {
            warn!(%url, status = status.as_u16(), "Inference service returned an error");
            return Err(InferenceError::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    #[instrument(skip(self, locator), fields(source = %locator.describe()))]
    async fn analyze(&self, locator: &ImageLocator) -> InferenceResult<AnalysisBatch> {
        let body = self.post_json(ANALYZE_PATH, locator).await?;
        let batch = decode_analyses(&body)?;
        debug!(faces = batch.len(), "Inference analysis decoded");
        Ok(batch)
    }

    #[instrument(skip(self, image_data), fields(image_len = image_data.len()))]
    async fn detect_logo(&self, image_data: &str) -> InferenceResult<LogoDetection> {
        let body = self
            .post_json(DETECT_PATH, &DetectRequest { image_data })
            .await?;
        decode_logo(&body)
    }
}
