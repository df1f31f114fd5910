//! Image locator - identifies the image an analysis is requested for

use serde::{Deserialize, Serialize};

/// Image carried inline in the request as an encoded payload
///
/// `image_data` is forwarded untouched; size and content type are not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub file_name: String,
    pub content_type: String,
    pub image_data: String,
}

/// Image stored in an external object store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    pub bucket: String,
    pub image_key: String,
}

/// Either an inline payload or a reference into object storage
///
/// Serializes to the flat JSON body the inference endpoint expects:
/// `{file_name, content_type, image_data}` or `{bucket, image_key}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageLocator {
    Inline(InlineImage),
    Stored(StoredImage),
}

impl ImageLocator {
    /// Create an inline locator
    pub fn inline(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        image_data: impl Into<String>,
    ) -> Self {
        Self::Inline(InlineImage {
            file_name: file_name.into(),
            content_type: content_type.into(),
            image_data: image_data.into(),
        })
    }

    /// Create an object-storage locator
    pub fn stored(bucket: impl Into<String>, image_key: impl Into<String>) -> Self {
        Self::Stored(StoredImage {
            bucket: bucket.into(),
            image_key: image_key.into(),
        })
    }

    /// Short human-readable description used in log fields
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(image) => format!("file:{}", image.file_name),
            Self::Stored(image) => format!("s3://{}/{}", image.bucket, image.image_key),
        }
    }
}
