//! Property-based tests for the metrics engines.
//!
//! These tests check the arithmetic invariants of a metrics snapshot over
//! random ledgers, using the `proptest` crate for case generation.

use chrono::{TimeZone, Utc};
use finsight_core::ledger::{set_opening_balance, LedgerState};
use finsight_core::metrics::MetricsSnapshot;
use finsight_core::transactions::{Transaction, TransactionType};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Amount in cents between 0.01 and 100,000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::Income), Just(TransactionType::Expense)]
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food & Dining".to_string()),
        Just("Housing".to_string()),
        Just("Transportation".to_string()),
        Just("Salary".to_string()),
        Just("Miscellaneous".to_string()),
    ]
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        arb_amount(),
        arb_type(),
        arb_category(),
        2020i32..=2025,
        1u32..=12,
        1u32..=28,
        "[a-f0-9]{12}",
    )
        .prop_map(
            |(amount, transaction_type, category, year, month, day, id)| Transaction {
                id,
                user_id: "user".to_string(),
                amount,
                transaction_type,
                category_id: category.to_lowercase(),
                category_name: category,
                description: None,
                timestamp: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
            },
        )
}

fn arb_ledger() -> impl Strategy<Value = LedgerState> {
    (
        (-10_000_000i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2)),
        proptest::collection::vec(arb_transaction(), 0..=60),
    )
        .prop_map(|(opening, transactions)| LedgerState::new(Some(opening), transactions))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The running balance is exact under decimal arithmetic.
    #[test]
    fn prop_balance_identity_holds(ledger in arb_ledger()) {
        let snapshot = MetricsSnapshot::from_ledger(&ledger).unwrap();
        let opening = ledger.opening_balance.unwrap();
        prop_assert_eq!(
            snapshot.current_balance,
            opening + snapshot.total_income - snapshot.total_expenses
        );
    }

    /// Category shares add up to 100 when there are expenses, 0 otherwise.
    #[test]
    fn prop_breakdown_percentages_sum_to_hundred(ledger in arb_ledger()) {
        let snapshot = MetricsSnapshot::from_ledger(&ledger).unwrap();
        let sum: Decimal = snapshot.category_breakdown.iter().map(|e| e.percentage).sum();

        if snapshot.total_expenses > Decimal::ZERO {
            prop_assert!((sum - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 6));
        } else {
            prop_assert_eq!(sum, Decimal::ZERO);
        }
    }

    /// Category totals cover every expense exactly once.
    #[test]
    fn prop_breakdown_totals_match_expenses(ledger in arb_ledger()) {
        let snapshot = MetricsSnapshot::from_ledger(&ledger).unwrap();
        let sum: Decimal = snapshot.category_breakdown.iter().map(|e| e.total).sum();
        prop_assert_eq!(sum, snapshot.total_expenses);

        for pair in snapshot.category_breakdown.windows(2) {
            prop_assert!(
                pair[0].total > pair[1].total
                    || (pair[0].total == pair[1].total && pair[0].category < pair[1].category)
            );
        }
    }

    /// Monthly buckets aggregate exactly to the global totals and are ordered.
    #[test]
    fn prop_monthly_buckets_sum_to_totals(ledger in arb_ledger()) {
        let snapshot = MetricsSnapshot::from_ledger(&ledger).unwrap();
        let income: Decimal = snapshot.monthly_trends.iter().map(|b| b.income).sum();
        let expenses: Decimal = snapshot.monthly_trends.iter().map(|b| b.expenses).sum();

        prop_assert_eq!(income, snapshot.total_income);
        prop_assert_eq!(expenses, snapshot.total_expenses);
        for pair in snapshot.monthly_trends.windows(2) {
            prop_assert!(pair[0].month < pair[1].month);
        }
        for bucket in &snapshot.monthly_trends {
            prop_assert_eq!(bucket.savings(), bucket.income - bucket.expenses);
        }
    }

    /// Computing twice from the same snapshot gives identical results,
    /// whatever order the store returned the entries in.
    #[test]
    fn prop_snapshot_is_deterministic(ledger in arb_ledger()) {
        let first = MetricsSnapshot::from_ledger(&ledger).unwrap();
        let second = MetricsSnapshot::from_ledger(&ledger).unwrap();
        prop_assert_eq!(&first, &second);

        let mut reversed = ledger.transactions.clone();
        reversed.reverse();
        let shuffled = LedgerState::new(ledger.opening_balance, reversed);
        let third = MetricsSnapshot::from_ledger(&shuffled).unwrap();
        prop_assert_eq!(first.total_income, third.total_income);
        prop_assert_eq!(first.total_expenses, third.total_expenses);
        prop_assert_eq!(first.category_breakdown, third.category_breakdown);
        prop_assert_eq!(first.monthly_trends, third.monthly_trends);
    }

    /// Savings rate is zero without income and otherwise passes through unclamped.
    #[test]
    fn prop_savings_rate_policy(ledger in arb_ledger()) {
        let snapshot = MetricsSnapshot::from_ledger(&ledger).unwrap();
        if snapshot.total_income == Decimal::ZERO {
            prop_assert_eq!(snapshot.savings_rate, Decimal::ZERO);
        } else {
            let expected = (snapshot.total_income - snapshot.total_expenses)
                / snapshot.total_income
                * Decimal::ONE_HUNDRED;
            prop_assert_eq!(snapshot.savings_rate, expected);
        }
    }

    /// A second opening-balance write always fails, whatever the amount.
    #[test]
    fn prop_opening_balance_set_at_most_once(
        first in -1_000_000i64..=1_000_000,
        second in -1_000_000i64..=1_000_000,
    ) {
        let initialized = set_opening_balance(&LedgerState::default(), Decimal::new(first, 2)).unwrap();
        prop_assert!(set_opening_balance(&initialized, Decimal::new(second, 2)).is_err());
    }
}
