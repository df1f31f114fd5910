//! Product selection

use emotion_core::value_objects::AnalysisBatch;

/// Chooses the product recommended for an analyzed image
///
/// An emotion-driven policy (for example angry -> product1, disgust -> product2,
/// fear -> product3, happy -> product4, neutral -> product5, sad -> product6)
/// plugs in here without touching the analysis flow.
pub trait ProductPolicy: Send + Sync {
    fn select(&self, batch: &AnalysisBatch) -> String;
}

/// Recommends the same product regardless of the analysis
#[derive(Debug, Clone)]
pub struct FixedProductPolicy {
    product: String,
}

impl FixedProductPolicy {
    pub const DEFAULT_PRODUCT: &'static str = "product1";

    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
        }
    }
}

impl Default for FixedProductPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRODUCT)
    }
}

impl ProductPolicy for FixedProductPolicy {
    fn select(&self, _batch: &AnalysisBatch) -> String {
        self.product.clone()
    }
}
