//! LLM-backed insight provider.
//!
//! Builds one prompt per insight section, asks the configured model for all
//! three concurrently, and parses the JSON answers into insight sections.

use async_trait::async_trait;
use finsight_core::insights::{
    ExpenseInsights, IncomeInsights, InsightProviderTrait, InsightSections, InvestmentInsights,
    MetricsPayload, ProviderError,
};
use log::{debug, warn};
use reqwest::Client as HttpClient;
use rig::{
    client::{CompletionClient, Nothing},
    completion::Prompt,
    providers::{anthropic, gemini, groq, ollama, openai},
};

use crate::config::InsightModelConfig;
use crate::error::AiError;
use crate::prompts::{expense_prompt, income_prompt, investment_prompt};
use crate::response::parse_section;

// ============================================================================
// LLM Insight Provider
// ============================================================================

/// Insight provider that prompts an LLM through rig-core.
pub struct LlmInsightProvider {
    config: InsightModelConfig,
}

impl LlmInsightProvider {
    pub fn new(config: InsightModelConfig) -> Self {
        Self { config }
    }

    /// Provider configured from environment variables.
    pub fn from_env() -> Self {
        Self::new(InsightModelConfig::from_env())
    }

    fn require_key(&self) -> Result<String, AiError> {
        self.config
            .api_key
            .clone()
            .ok_or_else(|| AiError::MissingApiKey(self.config.provider_id.clone()))
    }

    /// Sends one prompt to the configured model and returns the raw text.
    async fn complete(&self, prompt: String) -> Result<String, AiError> {
        let provider_id = self.config.provider_id.as_str();
        let model_id = self.config.model_id.as_str();

        let response = match provider_id {
            "anthropic" => {
                let key = self.require_key()?;
                let client: anthropic::Client<HttpClient> =
                    anthropic::Client::new(&key).map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            "gemini" | "google" => {
                let key = self.require_key()?;
                let client: gemini::Client<HttpClient> =
                    gemini::Client::new(&key).map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            "groq" => {
                let key = self.require_key()?;
                let client: groq::Client<HttpClient> =
                    groq::Client::new(&key).map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            "ollama" => {
                let mut builder = ollama::Client::<HttpClient>::builder().api_key(Nothing);
                if let Some(url) = &self.config.base_url {
                    builder = builder.base_url(url);
                }
                let client = builder
                    .build()
                    .map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            _ => {
                // Default to OpenAI-compatible
                let key = self.require_key()?;
                let client: openai::Client<HttpClient> =
                    openai::Client::new(&key).map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
        };

        Ok(response)
    }

    async fn generate_sections(
        &self,
        payload: &MetricsPayload,
    ) -> Result<InsightSections, AiError> {
        let symbol = self.config.currency_symbol.as_str();
        let income = income_prompt(payload, symbol);
        let expense = expense_prompt(payload, symbol);
        let investment = investment_prompt(payload, symbol);

        debug!(
            "Requesting insights from provider {} model {}",
            self.config.provider_id, self.config.model_id
        );

        let (income_raw, expense_raw, investment_raw) = futures::try_join!(
            self.complete(income),
            self.complete(expense),
            self.complete(investment)
        )?;

        Ok(InsightSections {
            income_insights: parse_section::<IncomeInsights>("income", &income_raw)?,
            expense_insights: parse_section::<ExpenseInsights>("expense", &expense_raw)?,
            investment_insights: parse_section::<InvestmentInsights>(
                "investment",
                &investment_raw,
            )?,
        })
    }
}

#[async_trait]
impl InsightProviderTrait for LlmInsightProvider {
    async fn generate(&self, payload: &MetricsPayload) -> Result<InsightSections, ProviderError> {
        self.generate_sections(payload).await.map_err(|e| {
            warn!("Insight provider {} failed: {}", self.config.provider_id, e);
            ProviderError::from(e)
        })
    }
}

// ============================================================================
// Fake Provider for Testing
// ============================================================================

/// A fake insight provider that returns deterministic sections.
pub struct FakeInsightProvider {
    /// Sections to return, or the error to fail with.
    pub outcome: Result<InsightSections, ProviderError>,
}

impl FakeInsightProvider {
    /// Create a fake provider that returns fixed sections.
    pub fn with_sections(sections: InsightSections) -> Self {
        Self {
            outcome: Ok(sections),
        }
    }

    /// Create a fake provider that always fails.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl InsightProviderTrait for FakeInsightProvider {
    async fn generate(&self, _payload: &MetricsPayload) -> Result<InsightSections, ProviderError> {
        self.outcome.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================
