//! Transport error mapping

use emotion_core::error::InferenceError;

/// Convert a reqwest error into the matching InferenceError kind
pub fn map_transport_error(e: &reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout(e.to_string())
    } else if e.is_decode() || e.is_body() {
        InferenceError::Decode(e.to_string())
    } else {
        InferenceError::Unreachable(e.to_string())
    }
}
