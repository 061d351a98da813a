use std::collections::BTreeMap;

use super::aggregator::checked_sum;
use super::TrendBucket;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionType};
use crate::utils::time_utils::month_key;

/// Buckets transactions by calendar month, oldest month first.
///
/// Months without transactions are left out rather than zero-filled.
pub fn compute_monthly_trends(transactions: &[Transaction]) -> Result<Vec<TrendBucket>> {
    let mut buckets: BTreeMap<String, TrendBucket> = BTreeMap::new();
    for transaction in transactions {
        let key = month_key(transaction.timestamp);
        let bucket = buckets
            .entry(key)
            .or_insert_with_key(|month| TrendBucket::empty(month));
        match transaction.transaction_type {
            TransactionType::Income => {
                bucket.income = checked_sum(bucket.income, transaction.amount)?;
            }
            TransactionType::Expense => {
                bucket.expenses = checked_sum(bucket.expenses, transaction.amount)?;
            }
        }
    }
    Ok(buckets.into_values().collect())
}
