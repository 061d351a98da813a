use std::time::Duration;
use thiserror::Error;

/// Failures of the external insight provider.
///
/// These are recovered inside the orchestrator and never reach callers as
/// hard failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Insight provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Insight provider unavailable: {0}")]
    Unavailable(String),

    #[error("Insight provider returned a malformed response: {0}")]
    MalformedResponse(String),
}
