//! Custom extractors

mod validated;

pub use validated::ValidatedJson;
