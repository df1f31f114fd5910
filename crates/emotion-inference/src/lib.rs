//! # emotion-inference
//!
//! Client for the remote emotion / logo inference service.
//!
//! The service has answered `/analyze` with several incompatible shapes over its
//! lifetime. [`wire`] reconciles all of them into an [`emotion_core::AnalysisBatch`]
//! so nothing downstream branches on the wire format.
//!
//! ```rust,ignore
//! use emotion_inference::{HttpInferenceClient, InferenceClientConfig};
//!
//! let client = HttpInferenceClient::new(InferenceClientConfig::new("http://localhost:5000"))?;
//! let batch = client.analyze(&locator).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use client::HttpInferenceClient;
pub use config::InferenceClientConfig;
