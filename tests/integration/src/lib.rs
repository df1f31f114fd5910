//! Integration test utilities for the emotion orchestrator
//!
//! Spawns the real server against PostgreSQL and a stub inference service
//! on ephemeral ports.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
