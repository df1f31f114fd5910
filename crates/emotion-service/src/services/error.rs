//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use emotion_common::AppError;
use emotion_core::error::{InferenceError, NormalizationError, StoreError};
use serde_json::json;
use std::fmt;

use super::persistence::PartialSaveError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Request rejected before any remote call
    Validation(String),

    /// Inference service failure
    Inference(InferenceError),

    /// Inference answered with a shape that cannot be normalized
    Normalization(NormalizationError),

    /// Result store failure with nothing persisted
    Store(StoreError),

    /// Multi-face save stopped after persisting some records
    PartialSave(PartialSaveError),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Inference(e) => write!(f, "{e}"),
            Self::Normalization(e) => write!(f, "{e}"),
            Self::Store(e) => write!(f, "{e}"),
            Self::PartialSave(e) => write!(f, "{e}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Inference(e) => Some(e),
            Self::Normalization(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::PartialSave(e) => Some(e),
            Self::Validation(_) | Self::Internal(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Inference(_)
            | Self::Normalization(_)
            | Self::Store(_)
            | Self::PartialSave(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Inference(e) => e.code(),
            Self::Normalization(e) => e.code(),
            Self::Store(e) => e.code(),
            Self::PartialSave(_) => "PARTIAL_SAVE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Structured details for the error body, if any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::PartialSave(e) => Some(json!({
                "failed_index": e.failed_index,
                "persisted_ids": e.persisted_ids(),
            })),
            Self::Inference(InferenceError::UpstreamStatus { status, .. }) => {
                Some(json!({ "upstream_status": status }))
            }
            _ => None,
        }
    }
}

impl From<InferenceError> for ServiceError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Malformed(e) => Self::Normalization(e),
            other => Self::Inference(other),
        }
    }
}

impl From<NormalizationError> for ServiceError {
    fn from(err: NormalizationError) -> Self {
        Self::Normalization(err)
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<PartialSaveError> for ServiceError {
    fn from(err: PartialSaveError) -> Self {
        // Nothing reached the store: a plain store failure
        if err.has_persisted() {
            Self::PartialSave(err)
        } else {
            Self::Store(err.source)
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Inference(e) => AppError::ExternalService(e.to_string()),
            ServiceError::Normalization(e) => AppError::ExternalService(e.to_string()),
            ServiceError::Store(e) => AppError::Database(e.to_string()),
            ServiceError::PartialSave(e) => AppError::Database(e.to_string()),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
