//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// File names containing this make the stub inference service fail
pub const OVERLOADED_MARKER: &str = "overloaded";

/// File names containing this make the stub report two faces
pub const GROUP_MARKER: &str = "group";

/// Detect payload the stub reports as a logo
pub const LOGO_MARKER: &str = "logo-image";

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix, so tests sharing one database find their own rows
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}-{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Inline analyze request
#[derive(Debug, Serialize)]
pub struct InlineImageBody {
    pub file_name: String,
    pub content_type: String,
    pub image_data: String,
}

impl InlineImageBody {
    /// A single-face image with a unique file name
    pub fn unique() -> Self {
        Self::named(&format!("face-{}.jpg", unique_suffix()))
    }

    /// A two-face image with a unique file name
    pub fn group() -> Self {
        Self::named(&format!("{GROUP_MARKER}-{}.jpg", unique_suffix()))
    }

    /// An image the inference service fails on
    pub fn overloaded() -> Self {
        Self::named(&format!("{OVERLOADED_MARKER}-{}.jpg", unique_suffix()))
    }

    pub fn named(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: "image/jpeg".to_string(),
            image_data: "/9j/4AAQSkZJRgABAQ==".to_string(),
        }
    }
}

/// Object-storage analyze request
#[derive(Debug, Serialize)]
pub struct StoredImageBody {
    pub bucket: String,
    pub image_key: String,
}

impl StoredImageBody {
    pub fn unique() -> Self {
        Self {
            bucket: "uploads".to_string(),
            image_key: format!("faces/{}.jpg", unique_suffix()),
        }
    }
}

/// Single-face analyze response
#[derive(Debug, Deserialize)]
pub struct SingleAnalysis {
    pub selected_product: String,
    pub analysis: AnalysisView,
}

/// One face of an analyze response
#[derive(Debug, Deserialize)]
pub struct AnalysisView {
    pub dominant_emotion: String,
    pub emotions: std::collections::BTreeMap<String, f64>,
}

/// Stored result from `GET /results`
#[derive(Debug, Deserialize)]
pub struct StoredResult {
    pub id: i64,
    pub file_name: Option<String>,
    pub bucket: Option<String>,
    pub image_key: Option<String>,
    pub dominant_emotion: String,
    pub created_at: String,
    pub emotions: Vec<StoredEmotion>,
}

/// Stored emotion row
#[derive(Debug, Deserialize)]
pub struct StoredEmotion {
    pub id: i64,
    pub result_id: i64,
    pub emotion: String,
    pub score: f64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
