use rust_decimal::Decimal;

use super::LedgerTotals;
use crate::errors::{Error, Result};
use crate::transactions::{Transaction, TransactionType};

/// Sums income and expenses and derives the running balance.
///
/// The result does not depend on transaction order.
pub fn compute_totals(
    transactions: &[Transaction],
    opening_balance: Decimal,
) -> Result<LedgerTotals> {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for t in transactions {
        match t.transaction_type {
            TransactionType::Income => total_income = checked_sum(total_income, t.amount)?,
            TransactionType::Expense => total_expenses = checked_sum(total_expenses, t.amount)?,
        }
    }

    let current_balance = opening_balance
        .checked_add(total_income)
        .and_then(|balance| balance.checked_sub(total_expenses))
        .ok_or_else(|| out_of_range("current balance"))?;

    Ok(LedgerTotals {
        opening_balance,
        total_income,
        total_expenses,
        current_balance,
    })
}

pub(super) fn checked_sum(acc: Decimal, amount: Decimal) -> Result<Decimal> {
    acc.checked_add(amount).ok_or_else(|| out_of_range("amount sum"))
}

pub(super) fn out_of_range(what: &str) -> Error {
    Error::InvariantViolation(format!("{} exceeds the decimal range", what))
}
