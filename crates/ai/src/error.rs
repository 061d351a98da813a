//! Insight provider error types.

use finsight_core::insights::ProviderError;
use thiserror::Error;

/// Errors raised while producing insights with an LLM.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model answered with something that is not the requested JSON.
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}

impl AiError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::InvalidResponse(_) => "INVALID_RESPONSE",
        }
    }
}

impl From<AiError> for ProviderError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::InvalidResponse(msg) => ProviderError::MalformedResponse(msg),
            other => ProviderError::Unavailable(format!("[{}] {}", other.code(), other)),
        }
    }
}
