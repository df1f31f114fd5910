//! Entity to model mappers
//!
//! - `result_with_emotions`: assemble a domain result from a parent row and its child rows
//! - `AnalysisResultInsert`: flatten a new result into column values

mod analysis_result;

pub use analysis_result::{result_with_emotions, AnalysisResultInsert};
