//! Business logic services
//!
//! Orchestration of inference, normalization and persistence.

pub mod analysis;
pub mod context;
pub mod detect;
pub mod error;
pub mod persistence;
pub mod product;
pub mod results;

// Re-export all services for convenience
pub use analysis::AnalysisService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use detect::LogoDetectionService;
pub use error::{ServiceError, ServiceResult};
pub use persistence::{save_batch, PartialSaveError};
pub use product::{FixedProductPolicy, ProductPolicy};
pub use results::ResultQueryService;
