//! Core error types for FinSight.
//!
//! This module defines store- and provider-agnostic error types. Ledger store
//! implementations convert their own failures into [`Error::Upstream`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger and metrics services.
#[derive(Error, Debug)]
pub enum Error {
    /// A transaction candidate or balance amount was rejected.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A ledger invariant would be broken by the requested write,
    /// or a ledger read returned data that breaks one.
    #[error("Ledger invariant violated: {0}")]
    InvariantViolation(String),

    /// The ledger store could not be reached or failed the request.
    #[error("Ledger store unavailable: {0}")]
    Upstream(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for transaction candidates and balance amounts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(String),

    #[error("Amount {0} exceeds the supported magnitude of {1}")]
    AmountOutOfRange(String, i64),

    #[error("Amount {0} has more than {1} decimal places")]
    ExcessPrecision(String, u32),

    #[error("Unknown transaction type '{0}', expected 'income' or 'expense'")]
    InvalidTransactionType(String),

    #[error("Category '{0}' does not exist")]
    UnknownCategory(String),

    #[error("Opening balance must be set before recording transactions")]
    LedgerNotInitialized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
