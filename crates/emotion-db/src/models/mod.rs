//! Database models - SQLx-compatible structs for PostgreSQL tables

mod analysis_result;

pub use analysis_result::{AnalysisEmotionModel, AnalysisResultModel};
