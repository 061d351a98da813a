//! Metrics module - pure aggregation over a ledger snapshot.
//!
//! Every engine here is synchronous and side-effect free. Sums and ratios are
//! carried at full decimal precision; rounding happens only in
//! [`MetricsSnapshot::rounded`] for presentation.

mod aggregator;
mod category_breakdown;
mod metrics_model;
mod metrics_service;
mod metrics_traits;
mod savings_rate;
mod time_series;



pub use aggregator::compute_totals;
pub use category_breakdown::compute_category_breakdown;
pub use metrics_model::{CategoryBreakdownEntry, LedgerTotals, MetricsSnapshot, TrendBucket};
pub use metrics_service::MetricsService;
pub use metrics_traits::MetricsServiceTrait;
pub use savings_rate::compute_savings_rate;
pub use time_series::compute_monthly_trends;
