//! Inference wire formats
//!
//! `/analyze` answers are accepted in three shapes:
//!
//! - envelope: `{"results": [{...}, ...]}`
//! - list: `[{...}, ...]` (one entry per detected face)
//! - single object: `{"dominant_emotion": ..., "emotions": {...}}` (aggregated)
//!
//! Every entry may name its score mapping `emotions` or `emotion`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use emotion_core::error::{InferenceError, NormalizationError};
use emotion_core::value_objects::{AnalysisBatch, CanonicalAnalysis, EmotionScores, LogoDetection};

/// Key of the tagged envelope
const RESULTS_KEY: &str = "results";

/// Body of a `/detect` request
#[derive(Debug, Serialize)]
pub struct DetectRequest<'a> {
    pub image_data: &'a str,
}

/// One analysis entry as the service sends it
///
/// Raw DeepFace output names the mapping `emotion`; when both names are
/// present `emotions` wins.
#[derive(Debug, Deserialize)]
struct WireAnalysis {
    dominant_emotion: String,
    emotions: Option<EmotionScores>,
    emotion: Option<EmotionScores>,
}

impl WireAnalysis {
    fn into_canonical(self) -> Option<CanonicalAnalysis> {
        let scores = self.emotions.or(self.emotion)?;
        Some(CanonicalAnalysis::new(self.dominant_emotion, scores))
    }
}

/// Decode an `/analyze` response body into a batch
///
/// # Errors
/// `Decode` if the body is not JSON at all, `Malformed` if it is JSON of an
/// unsupported shape, has an invalid entry, or holds no analyses.
pub fn decode_analyses(body: &str) -> Result<AnalysisBatch, InferenceError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| InferenceError::Decode(e.to_string()))?;
    Ok(normalize_value(value)?)
}

/// Reconcile an already parsed response into a batch
pub fn normalize_value(value: Value) -> Result<AnalysisBatch, NormalizationError> {
    match value {
        Value::Object(mut map) if map.contains_key(RESULTS_KEY) => match map.remove(RESULTS_KEY) {
            Some(Value::Array(entries)) => decode_entries(entries),
            Some(other) => Err(NormalizationError::UnsupportedShape(format!(
                "\"{RESULTS_KEY}\" holding {}",
                kind_of(&other)
            ))),
            None => Err(NormalizationError::Empty),
        },
        Value::Object(map) => decode_entry(0, Value::Object(map)).map(AnalysisBatch::single),
        Value::Array(entries) => decode_entries(entries),
        other => Err(NormalizationError::UnsupportedShape(kind_of(&other).to_string())),
    }
}

/// Decode a `/detect` response body
pub fn decode_logo(body: &str) -> Result<LogoDetection, InferenceError> {
    serde_json::from_str(body).map_err(|e| InferenceError::Decode(e.to_string()))
}

fn decode_entries(entries: Vec<Value>) -> Result<AnalysisBatch, NormalizationError> {
    let analyses = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;
    AnalysisBatch::new(analyses)
}

fn decode_entry(index: usize, entry: Value) -> Result<CanonicalAnalysis, NormalizationError> {
    let wire = serde_json::from_value::<WireAnalysis>(entry).map_err(|e| {
        NormalizationError::MalformedEntry {
            index,
            reason: e.to_string(),
        }
    })?;
    wire.into_canonical()
        .ok_or_else(|| NormalizationError::MalformedEntry {
            index,
            reason: "missing field `emotions`".to_string(),
        })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
