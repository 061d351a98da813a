use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::ledger_guard;
use super::{LedgerServiceTrait, LedgerState, LedgerStatusSummary, LedgerStoreTrait};
use crate::categories::Category;
use crate::errors::Result;
use crate::transactions::{NewTransaction, Transaction};

/// Reads a consistent snapshot of one user's ledger from the store.
pub fn load_ledger_state(store: &dyn LedgerStoreTrait, user_id: &str) -> Result<LedgerState> {
    // Transactions before the balance: appends require a balance, so a
    // non-empty list guarantees the balance read that follows sees it.
    let transactions = store.list_transactions(user_id)?;
    let opening_balance = store.get_opening_balance(user_id)?;
    Ok(LedgerState::new(opening_balance, transactions))
}

/// Service guarding writes to the ledger store.
pub struct LedgerService {
    store: Arc<dyn LedgerStoreTrait>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn LedgerStoreTrait>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    fn get_ledger(&self, user_id: &str) -> Result<LedgerState> {
        load_ledger_state(self.store.as_ref(), user_id)
    }

    fn get_ledger_status(&self, user_id: &str) -> Result<LedgerStatusSummary> {
        let state = self.get_ledger(user_id)?;
        Ok(LedgerStatusSummary::from(&state))
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        self.store.list_categories()
    }

    async fn set_opening_balance(&self, user_id: &str, amount: Decimal) -> Result<LedgerState> {
        let state = self.get_ledger(user_id)?;
        let initialized = ledger_guard::set_opening_balance(&state, amount).map_err(|e| {
            warn!("Rejected opening balance for user {}: {}", user_id, e);
            e
        })?;

        self.store.set_opening_balance(user_id, amount).await?;
        debug!("Opening balance set to {} for user {}", amount, user_id);
        Ok(initialized)
    }

    async fn append_transaction(
        &self,
        user_id: &str,
        candidate: NewTransaction,
    ) -> Result<Transaction> {
        let state = self.get_ledger(user_id)?;
        let categories = self.store.list_categories()?;
        let category = ledger_guard::validate_transaction(&state, &candidate, &categories)
            .map_err(|e| {
                warn!("Rejected transaction for user {}: {}", user_id, e);
                e
            })?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            amount: candidate.amount,
            transaction_type: candidate.transaction_type,
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            description: candidate.description,
            timestamp: candidate.timestamp.unwrap_or_else(Utc::now),
        };

        let stored = self.store.append_transaction(transaction).await?;
        debug!(
            "Appended {} transaction {} of {} for user {}",
            stored.transaction_type, stored.id, stored.amount, user_id
        );
        Ok(stored)
    }
}
