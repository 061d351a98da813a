use log::warn;
use std::time::Duration;

use crate::constants::DEFAULT_PROVIDER_TIMEOUT_SECS;

const TIMEOUT_ENV_KEY: &str = "FINSIGHT_INSIGHTS_TIMEOUT_SECS";

/// Settings for the insights orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsConfig {
    /// Upper bound on one provider call before falling back.
    pub provider_timeout: Duration,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl InsightsConfig {
    pub fn with_timeout(provider_timeout: Duration) -> Self {
        Self { provider_timeout }
    }

    /// Reads `FINSIGHT_INSIGHTS_TIMEOUT_SECS`, keeping the default when it is
    /// missing, zero, or not a number.
    pub fn from_env() -> Self {
        match std::env::var(TIMEOUT_ENV_KEY) {
            Ok(raw) => Self::from_timeout_value(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_timeout_value(raw: &str) -> Self {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Self::with_timeout(Duration::from_secs(secs)),
            _ => {
                warn!(
                    "Ignoring invalid {} value '{}', using {}s",
                    TIMEOUT_ENV_KEY, raw, DEFAULT_PROVIDER_TIMEOUT_SECS
                );
                Self::default()
            }
        }
    }
}
