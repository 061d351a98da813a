//! FinSight AI - LLM-backed insight generation using rig-core.
//!
//! This crate implements the core's insight-provider trait on top of hosted
//! or local language models.
//!
//! # Architecture
//!
//! - `config`: provider/model selection and prompt currency, read from the environment
//! - `prompts`: income, expense, and investment prompt builders
//! - `response`: JSON extraction and parsing of model answers
//! - `insight_provider`: the rig-core backed provider and a fake for tests
//!
//! # Example
//!
//! ```ignore
//! use finsight_ai::LlmInsightProvider;
//! use finsight_core::insights::{InsightsConfig, InsightsService, InsightsServiceTrait};
//!
//! let provider = Arc::new(LlmInsightProvider::from_env());
//! let service = InsightsService::new(store, provider, InsightsConfig::from_env());
//! let result = service.get_insights("user-id").await?;
//! ```

pub mod config;
pub mod error;
pub mod insight_provider;
pub mod prompts;
pub mod response;

pub use config::InsightModelConfig;
pub use error::AiError;
pub use insight_provider::{FakeInsightProvider, LlmInsightProvider};
