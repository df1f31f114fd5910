//! Value objects - immutable types describing inputs to and outputs of inference

mod analysis;
mod locator;

pub use analysis::{AnalysisBatch, CanonicalAnalysis, EmotionScores, LogoDetection};
pub use locator::{ImageLocator, InlineImage, StoredImage};
