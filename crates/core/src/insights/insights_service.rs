use async_trait::async_trait;
use log::{debug, error, warn};
use std::sync::Arc;

use super::{
    InsightProviderTrait, InsightSections, InsightsConfig, InsightsResult, InsightsServiceTrait,
    MetricsPayload, ProviderError,
};
use crate::errors::Result;
use crate::ledger::{load_ledger_state, LedgerStoreTrait};
use crate::metrics::MetricsSnapshot;

/// Orchestrates metrics computation and the insight provider call.
pub struct InsightsService {
    store: Arc<dyn LedgerStoreTrait>,
    provider: Arc<dyn InsightProviderTrait>,
    config: InsightsConfig,
}

impl InsightsService {
    pub fn new(
        store: Arc<dyn LedgerStoreTrait>,
        provider: Arc<dyn InsightProviderTrait>,
        config: InsightsConfig,
    ) -> Self {
        Self {
            store,
            provider,
            config,
        }
    }

    /// Calls the provider, bounded by the configured timeout.
    async fn generate_sections(
        &self,
        payload: &MetricsPayload,
    ) -> std::result::Result<InsightSections, ProviderError> {
        let timeout = self.config.provider_timeout;
        match tokio::time::timeout(timeout, self.provider.generate(payload)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(timeout)),
        }
    }
}

#[async_trait]
impl InsightsServiceTrait for InsightsService {
    async fn get_insights(&self, user_id: &str) -> Result<InsightsResult> {
        debug!("Generating insights for user {}", user_id);

        let ledger = load_ledger_state(self.store.as_ref(), user_id).map_err(|e| {
            error!("Error loading ledger for user {}: {}", user_id, e);
            e
        })?;

        // Metrics are final before the provider is contacted.
        let metrics = MetricsSnapshot::from_ledger(&ledger)?.rounded();
        let payload = MetricsPayload::from_snapshot(&metrics);

        match self.generate_sections(&payload).await {
            Ok(sections) => {
                debug!("Insight provider answered for user {}", user_id);
                Ok(InsightsResult::from_provider(metrics, sections))
            }
            Err(e) => {
                warn!(
                    "Insight generation failed for user {}, using fallback: {}",
                    user_id, e
                );
                Ok(InsightsResult::with_fallback(metrics, e.to_string()))
            }
        }
    }
}
