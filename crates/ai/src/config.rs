//! Model configuration for the insight provider.

const PROVIDER_ENV_KEY: &str = "FINSIGHT_AI_PROVIDER";
const MODEL_ENV_KEY: &str = "FINSIGHT_AI_MODEL";
const API_KEY_ENV_KEY: &str = "FINSIGHT_AI_API_KEY";
const GEMINI_API_KEY_ENV_KEY: &str = "GEMINI_API_KEY";
const BASE_URL_ENV_KEY: &str = "FINSIGHT_AI_BASE_URL";
const CURRENCY_ENV_KEY: &str = "FINSIGHT_CURRENCY_SYMBOL";

pub const DEFAULT_PROVIDER_ID: &str = "gemini";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Which model to ask and how amounts are written in prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightModelConfig {
    /// anthropic, gemini/google, groq, ollama, or any OpenAI-compatible id.
    pub provider_id: String,
    pub model_id: String,
    pub api_key: Option<String>,
    /// Only used for ollama.
    pub base_url: Option<String>,
    pub currency_symbol: String,
}

impl Default for InsightModelConfig {
    fn default() -> Self {
        Self {
            provider_id: DEFAULT_PROVIDER_ID.to_string(),
            model_id: default_model_for(DEFAULT_PROVIDER_ID).to_string(),
            api_key: None,
            base_url: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl InsightModelConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let provider_id = get(PROVIDER_ENV_KEY)
            .map(|p| p.to_lowercase())
            .unwrap_or_else(|| DEFAULT_PROVIDER_ID.to_string());
        let model_id =
            get(MODEL_ENV_KEY).unwrap_or_else(|| default_model_for(&provider_id).to_string());

        Self {
            model_id,
            api_key: get(API_KEY_ENV_KEY).or_else(|| get(GEMINI_API_KEY_ENV_KEY)),
            base_url: get(BASE_URL_ENV_KEY),
            currency_symbol: get(CURRENCY_ENV_KEY)
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            provider_id,
        }
    }
}

/// Default model per provider family.
pub fn default_model_for(provider_id: &str) -> &'static str {
    match provider_id {
        "gemini" | "google" => "gemini-2.0-flash",
        "anthropic" => "claude-3-5-haiku-latest",
        "groq" => "llama-3.1-8b-instant",
        "ollama" => "llama3.1",
        _ => "gpt-4o-mini",
    }
}
