use super::MetricsSnapshot;
use crate::errors::Result;

/// Read-only metrics query exposed to the API layer.
pub trait MetricsServiceTrait: Send + Sync {
    /// Metrics for the user's current ledger, rounded for display.
    fn get_metrics(&self, user_id: &str) -> Result<MetricsSnapshot>;
}
