//! Insights module - assembles the metrics payload, calls the insight
//! provider under a timeout, and falls back to default sections on failure.

mod insights_config;
mod insights_errors;
mod insights_model;
mod insights_service;
mod insights_traits;

#[cfg(test)]
mod insights_service_tests;

pub use insights_config::InsightsConfig;
pub use insights_errors::ProviderError;
pub use insights_model::{
    ExpenseInsights, IncomeInsights, InsightSections, InsightsResult, InsightsSource,
    InvestmentInsights, MetricsPayload,
};
pub use insights_service::InsightsService;
pub use insights_traits::{InsightProviderTrait, InsightsServiceTrait};
