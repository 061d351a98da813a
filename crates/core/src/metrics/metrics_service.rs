use log::{debug, error};
use std::sync::Arc;

use super::{MetricsServiceTrait, MetricsSnapshot};
use crate::errors::Result;
use crate::ledger::{load_ledger_state, LedgerStoreTrait};

pub struct MetricsService {
    store: Arc<dyn LedgerStoreTrait>,
}

impl MetricsService {
    pub fn new(store: Arc<dyn LedgerStoreTrait>) -> Self {
        Self { store }
    }
}

impl MetricsServiceTrait for MetricsService {
    fn get_metrics(&self, user_id: &str) -> Result<MetricsSnapshot> {
        debug!("Computing metrics for user {}", user_id);

        let ledger = load_ledger_state(self.store.as_ref(), user_id).map_err(|e| {
            error!("Error loading ledger for user {}: {}", user_id, e);
            e
        })?;
        let snapshot = MetricsSnapshot::from_ledger(&ledger)?;

        Ok(snapshot.rounded())
    }
}
