//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use emotion_core::value_objects::ImageLocator;

// ============================================================================
// Analysis Requests
// ============================================================================

/// Image sent inline as an encoded payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InlineImageRequest {
    #[validate(length(min = 1, message = "file_name must not be empty"))]
    pub file_name: String,

    #[serde(default)]
    pub content_type: String,

    #[validate(length(min = 1, message = "image_data must not be empty"))]
    pub image_data: String,
}

/// Image already stored in object storage
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoredImageRequest {
    #[validate(length(min = 1, message = "bucket must not be empty"))]
    pub bucket: String,

    #[validate(length(min = 1, message = "image_key must not be empty"))]
    pub image_key: String,
}

/// Body of `POST /analyze`
///
/// The variant is chosen by which fields are present.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeRequest {
    Inline(InlineImageRequest),
    Stored(StoredImageRequest),
}

impl Validate for AnalyzeRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Inline(request) => request.validate(),
            Self::Stored(request) => request.validate(),
        }
    }
}

impl AnalyzeRequest {
    /// Convert into the locator sent to the inference service
    pub fn into_locator(self) -> ImageLocator {
        match self {
            Self::Inline(r) => ImageLocator::inline(r.file_name, r.content_type, r.image_data),
            Self::Stored(r) => ImageLocator::stored(r.bucket, r.image_key),
        }
    }
}

// ============================================================================
// Logo Detection Requests
// ============================================================================

/// Body of `POST /detect`
///
/// Older clients send the payload as `image`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DetectLogoRequest {
    #[serde(default, alias = "image")]
    #[validate(length(min = 1, message = "image_data must not be empty"))]
    pub image_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_request_variant() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"file_name":"a.jpg","content_type":"image/jpeg","image_data":"AAAA"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(
            request.into_locator(),
            ImageLocator::inline("a.jpg", "image/jpeg", "AAAA")
        );
    }

    #[test]
    fn test_stored_request_variant() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"bucket":"uploads","image_key":"x.png"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_locator(), ImageLocator::stored("uploads", "x.png"));
    }

    #[test]
    fn test_unrecognized_body_rejected() {
        assert!(serde_json::from_str::<AnalyzeRequest>(r#"{"foo":"bar"}"#).is_err());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"file_name":"a.jpg","image_data":""}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("image_data"));

        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"bucket":"","image_key":"k"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("bucket"));
    }

    #[test]
    fn test_detect_accepts_legacy_field_name() {
        let request: DetectLogoRequest = serde_json::from_str(r#"{"image":"AAAA"}"#).unwrap();
        assert_eq!(request.image_data, "AAAA");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_detect_missing_image_fails_validation() {
        let request: DetectLogoRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }
}
