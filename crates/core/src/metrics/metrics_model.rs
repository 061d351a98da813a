//! Metrics models.

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::{
    compute_category_breakdown, compute_monthly_trends, compute_savings_rate, compute_totals,
};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::ledger::LedgerState;

/// Income/expense totals and the running balance built on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub opening_balance: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub current_balance: Decimal,
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownEntry {
    pub category: String,
    pub total: Decimal,
    /// Share of total expenses (0-100)
    pub percentage: Decimal,
}

/// Income and expense sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBucket {
    /// `YYYY-MM`
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

impl TrendBucket {
    pub fn empty(month: &str) -> Self {
        Self {
            month: month.to_string(),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }
    }

    pub fn savings(&self) -> Decimal {
        self.income - self.expenses
    }
}

// Emits the derived savings alongside the two stored sums.
impl Serialize for TrendBucket {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TrendBucket", 4)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("income", &self.income)?;
        state.serialize_field("expenses", &self.expenses)?;
        state.serialize_field("savings", &self.savings())?;
        state.end()
    }
}

/// Derived view of a ledger snapshot. Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// `None` until the ledger is initialized.
    pub opening_balance: Option<Decimal>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub current_balance: Decimal,
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
    pub monthly_trends: Vec<TrendBucket>,
    pub savings_rate: Decimal,
    pub transaction_count: usize,
}

impl MetricsSnapshot {
    /// Computes every metric from `ledger` at full precision.
    ///
    /// An uninitialized ledger must be empty and yields all-zero metrics. One
    /// that holds transactions without an opening balance is rejected.
    pub fn from_ledger(ledger: &LedgerState) -> Result<Self> {
        if !ledger.is_initialized() && ledger.has_transactions() {
            return Err(Error::InvariantViolation(format!(
                "ledger holds {} transaction(s) but no opening balance",
                ledger.transactions.len()
            )));
        }

        let totals = compute_totals(
            &ledger.transactions,
            ledger.opening_balance.unwrap_or(Decimal::ZERO),
        )?;

        Ok(Self {
            opening_balance: ledger.opening_balance,
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            current_balance: totals.current_balance,
            category_breakdown: compute_category_breakdown(
                &ledger.transactions,
                totals.total_expenses,
            )?,
            monthly_trends: compute_monthly_trends(&ledger.transactions)?,
            savings_rate: compute_savings_rate(&totals)?,
            transaction_count: ledger.transactions.len(),
        })
    }

    /// Copy rounded to display precision.
    pub fn rounded(&self) -> Self {
        let round = |value: Decimal| value.round_dp(DISPLAY_DECIMAL_PRECISION);
        Self {
            opening_balance: self.opening_balance.map(round),
            total_income: round(self.total_income),
            total_expenses: round(self.total_expenses),
            current_balance: round(self.current_balance),
            category_breakdown: self
                .category_breakdown
                .iter()
                .map(|entry| CategoryBreakdownEntry {
                    category: entry.category.clone(),
                    total: round(entry.total),
                    percentage: round(entry.percentage),
                })
                .collect(),
            monthly_trends: self
                .monthly_trends
                .iter()
                .map(|bucket| TrendBucket {
                    month: bucket.month.clone(),
                    income: round(bucket.income),
                    expenses: round(bucket.expenses),
                })
                .collect(),
            savings_rate: round(self.savings_rate),
            transaction_count: self.transaction_count,
        }
    }
}
