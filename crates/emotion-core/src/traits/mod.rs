//! Traits (ports) implemented by the infrastructure crates

mod inference;
mod repositories;

pub use inference::{InferenceClient, InferenceResult};
pub use repositories::{AnalysisResultRepository, RepoResult};
