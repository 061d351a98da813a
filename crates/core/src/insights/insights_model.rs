//! Insight payload and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::ALLOCATION_CLASSES;
use crate::metrics::{CategoryBreakdownEntry, MetricsSnapshot, TrendBucket};

const FALLBACK_ANALYSIS: &str =
    "Personalized insights are unavailable right now. Your figures are up to date; try again later.";

/// Normalized metrics handed to the insight provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsPayload {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub current_balance: Decimal,
    pub savings_rate: Decimal,
    /// May be empty for a ledger without expenses.
    pub expense_by_category: Vec<CategoryBreakdownEntry>,
    /// May be empty for a ledger without transactions.
    pub monthly_trends: Vec<TrendBucket>,
    /// Asset classes the provider should allocate across.
    pub allocation_classes: Vec<String>,
}

impl MetricsPayload {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        Self {
            total_income: snapshot.total_income,
            total_expenses: snapshot.total_expenses,
            current_balance: snapshot.current_balance,
            savings_rate: snapshot.savings_rate,
            expense_by_category: snapshot.category_breakdown.clone(),
            monthly_trends: snapshot.monthly_trends.clone(),
            allocation_classes: ALLOCATION_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_by_category.is_empty() && self.monthly_trends.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeInsights {
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseInsights {
    pub analysis: String,
    pub optimization: Vec<String>,
    #[serde(alias = "savings_opportunities")]
    pub savings_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentInsights {
    pub strategy: String,
    pub recommendations: Vec<String>,
    /// Asset class to suggested share, as text (e.g. "60%").
    pub allocation: BTreeMap<String, String>,
}

/// Narrative sections produced by the insight provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightSections {
    #[serde(alias = "income_insights")]
    pub income_insights: IncomeInsights,
    #[serde(alias = "expense_insights")]
    pub expense_insights: ExpenseInsights,
    #[serde(alias = "investment_insights")]
    pub investment_insights: InvestmentInsights,
}

impl InsightSections {
    /// Structurally valid stand-in used when the provider fails.
    pub fn fallback() -> Self {
        Self {
            income_insights: IncomeInsights {
                analysis: FALLBACK_ANALYSIS.to_string(),
                ..Default::default()
            },
            expense_insights: ExpenseInsights {
                analysis: FALLBACK_ANALYSIS.to_string(),
                ..Default::default()
            },
            investment_insights: InvestmentInsights {
                strategy: FALLBACK_ANALYSIS.to_string(),
                ..Default::default()
            },
        }
    }
}

/// Where the narrative sections of a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightsSource {
    Provider,
    Fallback,
}

/// Metrics plus narrative insights for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResult {
    pub metrics: MetricsSnapshot,
    #[serde(flatten)]
    pub sections: InsightSections,
    pub source: InsightsSource,
    /// Why the fallback was used, if it was.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_error: Option<String>,
}

impl InsightsResult {
    pub fn from_provider(metrics: MetricsSnapshot, sections: InsightSections) -> Self {
        Self {
            metrics,
            sections,
            source: InsightsSource::Provider,
            provider_error: None,
        }
    }

    pub fn with_fallback(metrics: MetricsSnapshot, reason: impl Into<String>) -> Self {
        Self {
            metrics,
            sections: InsightSections::fallback(),
            source: InsightsSource::Fallback,
            provider_error: Some(reason.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == InsightsSource::Fallback
    }
}
