use async_trait::async_trait;

use super::{InsightSections, InsightsResult, MetricsPayload, ProviderError};
use crate::errors::Result;

/// External generator of narrative insights. Opaque to the core.
#[async_trait]
pub trait InsightProviderTrait: Send + Sync {
    /// Turns a metrics payload into narrative sections.
    ///
    /// Must accept a payload with no categories and no trend buckets.
    async fn generate(
        &self,
        payload: &MetricsPayload,
    ) -> std::result::Result<InsightSections, ProviderError>;
}

/// Read-only insights query exposed to the API layer.
#[async_trait]
pub trait InsightsServiceTrait: Send + Sync {
    /// Metrics and insights for the user's current ledger.
    ///
    /// Only ledger read failures are errors; provider failures yield a
    /// fallback result.
    async fn get_insights(&self, user_id: &str) -> Result<InsightsResult>;
}
