use super::*;
use crate::categories::Category;
use crate::errors::{Error, Result};
use crate::ledger::{InMemoryLedgerStore, LedgerService, LedgerServiceTrait, LedgerStoreTrait};
use crate::transactions::{NewTransaction, Transaction, TransactionType};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const USER: &str = "user-1";

// =============================================================================
// Mock providers
// =============================================================================

/// Returns fixed sections and records every payload it receives.
struct RecordingProvider {
    sections: InsightSections,
    payloads: Mutex<Vec<MetricsPayload>>,
}

impl RecordingProvider {
    fn new(sections: InsightSections) -> Self {
        Self {
            sections,
            payloads: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl InsightProviderTrait for RecordingProvider {
    async fn generate(
        &self,
        payload: &MetricsPayload,
    ) -> std::result::Result<InsightSections, ProviderError> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(self.sections.clone())
    }
}

struct FailingProvider(ProviderError);

#[async_trait]
impl InsightProviderTrait for FailingProvider {
    async fn generate(
        &self,
        _payload: &MetricsPayload,
    ) -> std::result::Result<InsightSections, ProviderError> {
        Err(self.0.clone())
    }
}

/// Never answers within any reasonable timeout.
struct StalledProvider;

#[async_trait]
impl InsightProviderTrait for StalledProvider {
    async fn generate(
        &self,
        _payload: &MetricsPayload,
    ) -> std::result::Result<InsightSections, ProviderError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(InsightSections::default())
    }
}

struct UnavailableStore;

#[async_trait]
impl LedgerStoreTrait for UnavailableStore {
    fn list_transactions(&self, _user_id: &str) -> Result<Vec<Transaction>> {
        Err(Error::Upstream("database offline".to_string()))
    }

    fn get_opening_balance(&self, _user_id: &str) -> Result<Option<Decimal>> {
        Err(Error::Upstream("database offline".to_string()))
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        Err(Error::Upstream("database offline".to_string()))
    }

    async fn set_opening_balance(&self, _user_id: &str, _amount: Decimal) -> Result<()> {
        unimplemented!()
    }

    async fn append_transaction(&self, _transaction: Transaction) -> Result<Transaction> {
        unimplemented!()
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn provider_sections() -> InsightSections {
    let mut allocation = BTreeMap::new();
    allocation.insert("stocks".to_string(), "60%".to_string());
    allocation.insert("bonds".to_string(), "30%".to_string());
    allocation.insert("cash".to_string(), "10%".to_string());

    InsightSections {
        income_insights: IncomeInsights {
            analysis: "Income is steady.".to_string(),
            recommendations: vec!["Automate transfers".to_string()],
            opportunities: vec!["Freelance work".to_string()],
        },
        expense_insights: ExpenseInsights {
            analysis: "Food dominates spending.".to_string(),
            optimization: vec!["Cook at home".to_string()],
            savings_opportunities: vec!["Bulk buying".to_string()],
        },
        investment_insights: InvestmentInsights {
            strategy: "Balanced".to_string(),
            recommendations: vec!["Index funds".to_string()],
            allocation,
        },
    }
}

/// Ledger from the reference scenario: 1000.00 opening balance, two Food
/// expenses and one income.
async fn seeded_store() -> Arc<InMemoryLedgerStore> {
    let store = Arc::new(InMemoryLedgerStore::new(vec![
        Category {
            id: "cat-food".to_string(),
            name: "Food".to_string(),
        },
        Category {
            id: "cat-salary".to_string(),
            name: "Salary".to_string(),
        },
    ]));
    let ledger = LedgerService::new(store.clone());
    ledger.set_opening_balance(USER, dec!(1000.00)).await.unwrap();

    let entries = [
        (dec!(200.00), TransactionType::Expense, "cat-food", 1),
        (dec!(500.00), TransactionType::Income, "cat-salary", 2),
        (dec!(300.00), TransactionType::Expense, "cat-food", 3),
    ];
    for (amount, transaction_type, category_id, day) in entries {
        ledger
            .append_transaction(
                USER,
                NewTransaction {
                    amount,
                    transaction_type,
                    category_id: category_id.to_string(),
                    description: None,
                    timestamp: Some(Utc.with_ymd_and_hms(2024, 6, day, 10, 0, 0).unwrap()),
                },
            )
            .await
            .unwrap();
    }
    store
}

fn assert_scenario_metrics(metrics: &crate::metrics::MetricsSnapshot) {
    assert_eq!(metrics.total_income, dec!(500.00));
    assert_eq!(metrics.total_expenses, dec!(500.00));
    assert_eq!(metrics.current_balance, dec!(1000.00));
    assert_eq!(metrics.category_breakdown.len(), 1);
    assert_eq!(metrics.category_breakdown[0].category, "Food");
    assert_eq!(metrics.category_breakdown[0].total, dec!(500.00));
    assert_eq!(metrics.category_breakdown[0].percentage, dec!(100));
    assert_eq!(metrics.savings_rate, Decimal::ZERO);
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_provider_sections_are_merged_verbatim() {
    let store = seeded_store().await;
    let provider = Arc::new(RecordingProvider::new(provider_sections()));
    let service = InsightsService::new(store, provider.clone(), InsightsConfig::default());

    let result = service.get_insights(USER).await.unwrap();
    assert_eq!(result.source, InsightsSource::Provider);
    assert_eq!(result.provider_error, None);
    assert_eq!(result.sections, provider_sections());
    assert_scenario_metrics(&result.metrics);

    let payloads = provider.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].total_income, dec!(500.00));
    assert_eq!(payloads[0].expense_by_category.len(), 1);
    assert_eq!(payloads[0].monthly_trends.len(), 1);
    assert_eq!(payloads[0].monthly_trends[0].month, "2024-06");
    assert_eq!(
        payloads[0].allocation_classes,
        vec!["stocks".to_string(), "bonds".to_string(), "cash".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_provider_timeout_falls_back_with_metrics_intact() {
    let store = seeded_store().await;
    let service = InsightsService::new(
        store,
        Arc::new(StalledProvider),
        InsightsConfig::with_timeout(Duration::from_secs(5)),
    );

    let result = service.get_insights(USER).await.unwrap();
    assert!(result.is_fallback());
    assert_eq!(result.sections, InsightSections::fallback());
    assert!(result.sections.income_insights.recommendations.is_empty());
    assert!(result.sections.expense_insights.optimization.is_empty());
    assert!(result.sections.investment_insights.allocation.is_empty());
    assert!(result
        .provider_error
        .as_deref()
        .unwrap_or_default()
        .contains("did not answer"));
    assert_scenario_metrics(&result.metrics);
}

#[tokio::test]
async fn test_provider_error_falls_back() {
    let store = seeded_store().await;
    let service = InsightsService::new(
        store,
        Arc::new(FailingProvider(ProviderError::MalformedResponse(
            "expected JSON object".to_string(),
        ))),
        InsightsConfig::default(),
    );

    let result = service.get_insights(USER).await.unwrap();
    assert_eq!(result.source, InsightsSource::Fallback);
    assert!(!result.sections.income_insights.analysis.is_empty());
    assert_scenario_metrics(&result.metrics);
}

#[tokio::test]
async fn test_new_user_payload_is_empty_but_valid() {
    let store = Arc::new(InMemoryLedgerStore::with_default_categories());
    let provider = Arc::new(RecordingProvider::new(InsightSections::default()));
    let service = InsightsService::new(store, provider.clone(), InsightsConfig::default());

    let result = service.get_insights("new-user").await.unwrap();
    assert_eq!(result.metrics.total_income, Decimal::ZERO);
    assert_eq!(result.metrics.current_balance, Decimal::ZERO);
    assert!(result.metrics.category_breakdown.is_empty());
    assert!(result.metrics.monthly_trends.is_empty());

    let payloads = provider.payloads.lock().unwrap();
    assert!(payloads[0].is_empty());
}

#[tokio::test]
async fn test_store_outage_is_fatal_and_provider_not_called() {
    let provider = Arc::new(RecordingProvider::new(provider_sections()));
    let service = InsightsService::new(
        Arc::new(UnavailableStore),
        provider.clone(),
        InsightsConfig::default(),
    );

    let result = service.get_insights(USER).await;
    assert!(matches!(result, Err(Error::Upstream(_))));
    assert!(provider.payloads.lock().unwrap().is_empty());
}

#[test]
fn test_provider_json_with_snake_case_keys_deserializes() {
    let json = r#"{
        "income_insights": {"analysis": "ok", "recommendations": ["a"], "opportunities": []},
        "expense_insights": {"analysis": "fine", "optimization": [], "savings_opportunities": ["b"]},
        "investment_insights": {"strategy": "s", "allocation": {"stocks": "50%"}}
    }"#;
    let sections: InsightSections = serde_json::from_str(json).unwrap();
    assert_eq!(sections.expense_insights.savings_opportunities, vec!["b"]);
    assert!(sections.investment_insights.recommendations.is_empty());
    assert_eq!(
        sections.investment_insights.allocation.get("stocks"),
        Some(&"50%".to_string())
    );
}

#[test]
fn test_insights_result_serializes_sections_at_top_level() {
    let result = InsightsResult::with_fallback(
        crate::metrics::MetricsSnapshot::from_ledger(&Default::default()).unwrap(),
        "provider down",
    );
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("incomeInsights").is_some());
    assert!(json.get("metrics").is_some());
    assert_eq!(json["source"], "FALLBACK");
    assert_eq!(json["providerError"], "provider down");
}
