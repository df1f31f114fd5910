//! Inference client configuration

use std::time::Duration;

/// Connection settings for the inference service
#[derive(Debug, Clone)]
pub struct InferenceClientConfig {
    /// Base URL; endpoint paths are appended to it
    pub base_url: String,
    /// Whole-request timeout, body included
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl InferenceClientConfig {
    /// Config with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Full URL of an endpoint, tolerating a trailing slash on the base
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for InferenceClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:5000"),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}
