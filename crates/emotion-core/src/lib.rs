//! # emotion-core
//!
//! Domain layer containing image locators, canonical analyses, result entities,
//! the result normalizer, and the traits implemented by the infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, HTTP client, web framework).

pub mod entities;
pub mod error;
pub mod normalize;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AnalysisEmotion, AnalysisResult, NewAnalysisEmotion, NewAnalysisResult, SourceRef};
pub use error::{InferenceError, NormalizationError, StoreError};
pub use normalize::normalize;
pub use traits::{AnalysisResultRepository, InferenceClient, InferenceResult, RepoResult};
pub use value_objects::{
    AnalysisBatch, CanonicalAnalysis, EmotionScores, ImageLocator, InlineImage, LogoDetection,
    StoredImage,
};
