use rust_decimal::Decimal;

use super::aggregator::out_of_range;
use super::LedgerTotals;
use crate::errors::Result;

/// Share of income kept, in percent.
///
/// Zero when there is no income: nothing earned means no savings to report.
/// Not clamped, so over-saving (above 100) and net-negative periods (below 0)
/// pass through as computed.
pub fn compute_savings_rate(totals: &LedgerTotals) -> Result<Decimal> {
    if totals.total_income <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    totals
        .total_income
        .checked_sub(totals.total_expenses)
        .and_then(|saved| saved.checked_div(totals.total_income))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| out_of_range("savings rate"))
}
