use async_trait::async_trait;
use rust_decimal::Decimal;

use super::{LedgerState, LedgerStatusSummary};
use crate::categories::Category;
use crate::errors::Result;
use crate::transactions::{NewTransaction, Transaction};

/// Contract of the persistent ledger store.
///
/// Implementations report their own failures as `Error::Upstream`. Writes
/// must be visible to every later read for the same user.
#[async_trait]
pub trait LedgerStoreTrait: Send + Sync {
    /// Transactions for `user_id`, ordered by timestamp.
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_opening_balance(&self, user_id: &str) -> Result<Option<Decimal>>;
    fn list_categories(&self) -> Result<Vec<Category>>;
    /// Fails with `InvariantViolation` if the balance is set or transactions exist.
    async fn set_opening_balance(&self, user_id: &str, amount: Decimal) -> Result<()>;
    async fn append_transaction(&self, transaction: Transaction) -> Result<Transaction>;
}

/// Trait for ledger service operations
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    fn get_ledger(&self, user_id: &str) -> Result<LedgerState>;
    fn get_ledger_status(&self, user_id: &str) -> Result<LedgerStatusSummary>;
    fn list_categories(&self) -> Result<Vec<Category>>;
    async fn set_opening_balance(&self, user_id: &str, amount: Decimal) -> Result<LedgerState>;
    async fn append_transaction(
        &self,
        user_id: &str,
        candidate: NewTransaction,
    ) -> Result<Transaction>;
}
