//! Domain entities - stored analysis results and their emotion breakdown

mod analysis_result;

pub use analysis_result::{
    AnalysisEmotion, AnalysisResult, NewAnalysisEmotion, NewAnalysisResult, SourceRef,
};
