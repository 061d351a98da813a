//! Ledger state models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// Opening-balance lifecycle of a ledger.
///
/// The only transition is `Uninitialized -> Initialized`, and it is only
/// allowed while the ledger holds no transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerStatus {
    Uninitialized,
    Initialized,
}

/// Point-in-time snapshot of one user's ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    pub opening_balance: Option<Decimal>,
    /// Ordered by timestamp ascending.
    pub transactions: Vec<Transaction>,
}

impl LedgerState {
    /// Builds a snapshot, ordering transactions by timestamp.
    ///
    /// The sort is stable so entries sharing a timestamp keep store order.
    pub fn new(opening_balance: Option<Decimal>, mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by_key(|t| t.timestamp);
        Self {
            opening_balance,
            transactions,
        }
    }

    pub fn status(&self) -> LedgerStatus {
        match self.opening_balance {
            Some(_) => LedgerStatus::Initialized,
            None => LedgerStatus::Uninitialized,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.status() == LedgerStatus::Initialized
    }

    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }
}

/// Setup status of a ledger as shown to a client before first use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatusSummary {
    pub status: LedgerStatus,
    pub has_transactions: bool,
    pub opening_balance: Option<Decimal>,
}

impl From<&LedgerState> for LedgerStatusSummary {
    fn from(state: &LedgerState) -> Self {
        Self {
            status: state.status(),
            has_transactions: state.has_transactions(),
            opening_balance: state.opening_balance,
        }
    }
}
