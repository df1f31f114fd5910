//! Domain errors - failures of inference, normalization and persistence

use thiserror::Error;

/// Response shape could not be reconciled into canonical analyses
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Inference returned no analyses")]
    Empty,

    #[error("Unsupported inference response shape: expected object or array, got {0}")]
    UnsupportedShape(String),

    #[error("Malformed analysis at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

impl NormalizationError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        "NORMALIZATION_ERROR"
    }
}

/// Inference endpoint failures
///
/// None of these are retried at this layer.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference service unreachable: {0}")]
    Unreachable(String),

    #[error("Inference service timed out: {0}")]
    Timeout(String),

    /// Non-success status; `body` is the upstream response text, unmodified
    #[error("Inference service error ({status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to decode inference response: {0}")]
    Decode(String),

    #[error(transparent)]
    Malformed(#[from] NormalizationError),
}

impl InferenceError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(e) => e.code(),
            _ => "INFERENCE_ERROR",
        }
    }

    /// Upstream status code, when the service answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result store failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store constraint violation: {0}")]
    Constraint(String),

    #[error("Store query error: {0}")]
    Query(String),
}

impl StoreError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        "STORE_ERROR"
    }

    /// Whether the store itself is unavailable, as opposed to a bad statement
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
