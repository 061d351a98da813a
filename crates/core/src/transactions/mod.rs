//! Transactions module - ledger entry models.

mod transactions_model;


pub use transactions_model::{NewTransaction, Transaction, TransactionType};
