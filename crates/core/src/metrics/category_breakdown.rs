use rust_decimal::Decimal;
use std::collections::HashMap;

use super::aggregator::{checked_sum, out_of_range};
use super::CategoryBreakdownEntry;
use crate::errors::Result;
use crate::transactions::Transaction;

/// Groups expenses by category name with each group's share of `total_expenses`.
///
/// Shares are 0 when `total_expenses` is zero. Entries are ordered by total
/// descending, then by name ascending.
pub fn compute_category_breakdown(
    transactions: &[Transaction],
    total_expenses: Decimal,
) -> Result<Vec<CategoryBreakdownEntry>> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let total = totals
            .entry(transaction.category_name.as_str())
            .or_insert(Decimal::ZERO);
        *total = checked_sum(*total, transaction.amount)?;
    }

    let mut entries = totals
        .into_iter()
        .map(|(category, total)| {
            Ok(CategoryBreakdownEntry {
                category: category.to_string(),
                total,
                percentage: share_of(total, total_expenses)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    Ok(entries)
}

// Divides before scaling so the intermediate stays within [0, 1].
fn share_of(total: Decimal, total_expenses: Decimal) -> Result<Decimal> {
    if total_expenses <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    total
        .checked_div(total_expenses)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| out_of_range("category share"))
}
