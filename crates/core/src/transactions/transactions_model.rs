//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::InvalidTransactionType(s.to_string())),
        }
    }
}

/// A candidate entry submitted for appending to a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category_id: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to the append time when absent.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewTransaction {
    /// Builds a candidate from loosely typed input, parsing the type string.
    pub fn parse(
        amount: Decimal,
        transaction_type: &str,
        category_id: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            amount,
            transaction_type: transaction_type.parse()?,
            category_id: category_id.into(),
            description,
            timestamp: None,
        })
    }
}

/// An accepted ledger entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category_id: String,
    /// Category name captured at append time.
    pub category_name: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
