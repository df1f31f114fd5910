//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod analysis;
pub mod detect;
pub mod health;
