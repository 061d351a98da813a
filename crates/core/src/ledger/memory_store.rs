//! In-memory ledger store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use super::LedgerStoreTrait;
use crate::categories::{default_categories, Category};
use crate::errors::{Error, Result, ValidationError};
use crate::transactions::Transaction;

#[derive(Debug, Default)]
struct UserLedger {
    opening_balance: Option<Decimal>,
    transactions: Vec<Transaction>,
}

/// Ledger store kept in process memory.
///
/// Writes take the write lock and re-check the opening-balance invariant, so
/// concurrent writers for the same user cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    ledgers: RwLock<HashMap<String, UserLedger>>,
    categories: RwLock<Vec<Category>>,
}

impl InMemoryLedgerStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            ledgers: RwLock::new(HashMap::new()),
            categories: RwLock::new(categories),
        }
    }

    /// Store seeded with the default expense and income categories.
    pub fn with_default_categories() -> Self {
        Self::new(default_categories())
    }

    pub fn add_category(&self, category: Category) -> Result<()> {
        let mut categories = self.categories.write().map_err(lock_error)?;
        if categories.iter().any(|c| c.name == category.name) {
            return Err(ValidationError::InvalidInput(format!(
                "category '{}' already exists",
                category.name
            ))
            .into());
        }
        categories.push(category);
        Ok(())
    }

    pub fn category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories.iter().find(|c| c.name == name).cloned())
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> Error {
    Error::Unexpected(format!("ledger store lock poisoned: {}", err))
}

#[async_trait]
impl LedgerStoreTrait for InMemoryLedgerStore {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let ledgers = self.ledgers.read().map_err(lock_error)?;
        Ok(ledgers
            .get(user_id)
            .map(|l| l.transactions.clone())
            .unwrap_or_default())
    }

    fn get_opening_balance(&self, user_id: &str) -> Result<Option<Decimal>> {
        let ledgers = self.ledgers.read().map_err(lock_error)?;
        Ok(ledgers.get(user_id).and_then(|l| l.opening_balance))
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories.clone())
    }

    async fn set_opening_balance(&self, user_id: &str, amount: Decimal) -> Result<()> {
        let mut ledgers = self.ledgers.write().map_err(lock_error)?;
        let ledger = ledgers.entry(user_id.to_string()).or_default();
        if ledger.opening_balance.is_some() || !ledger.transactions.is_empty() {
            return Err(Error::InvariantViolation(format!(
                "opening balance for user {} can no longer be set",
                user_id
            )));
        }
        ledger.opening_balance = Some(amount);
        Ok(())
    }

    async fn append_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut ledgers = self.ledgers.write().map_err(lock_error)?;
        let ledger = ledgers.entry(transaction.user_id.clone()).or_default();
        if ledger.opening_balance.is_none() {
            return Err(ValidationError::LedgerNotInitialized.into());
        }
        let position = ledger
            .transactions
            .partition_point(|t| t.timestamp <= transaction.timestamp);
        ledger.transactions.insert(position, transaction.clone());
        Ok(transaction)
    }
}
