/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 12/7/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_MS, MAX_RETRY_DELAY_MS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for HTTP request retry behavior
///
/// Only transport-level failures are retried; an unexpected HTTP status is
/// surfaced immediately. The bound covers additional attempts: a call
/// performs at most `max_retries() + 1` HTTP exchanges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries on transport failure (None = default 5)
    pub max_retry_count: Option<u32>,
    /// Base delay in milliseconds for the first backoff step (None = default 250)
    pub retry_base_delay_ms: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration with the environment-driven defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_base_delay_ms: None,
        }
    }

    /// Creates a retry configuration with a custom backoff base delay
    #[must_use]
    pub fn with_base_delay_ms(base_delay_ms: u64) -> Self {
        Self {
            max_retry_count: None,
            retry_base_delay_ms: Some(base_delay_ms),
        }
    }

    /// Creates a retry configuration with both a retry bound and a base delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_base_delay_ms: Some(base_delay_ms),
        }
    }

    /// Gets the maximum retry count (default: 5)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Gets the backoff base delay in milliseconds (default: 250)
    #[must_use]
    pub fn base_delay_ms(&self) -> u64 {
        self.retry_base_delay_ms.unwrap_or(DEFAULT_RETRY_BASE_DELAY_MS)
    }

    /// Computes the backoff delay before the given retry
    ///
    /// Exponential in the attempt number, capped, with up to 50% random
    /// jitter added to avoid retry patterns. `attempt` is 1-based (the
    /// number of attempts already performed).
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay_ms();
        let exp = base
            .saturating_mul(1u64 << attempt.saturating_sub(1).min(16))
            .min(MAX_RETRY_DELAY_MS);
        let jitter = rand::random::<u64>() % (exp / 2 + 1);
        Duration::from_millis(exp + jitter)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_retry_count: Option<u32> = get_env_or_none("ETNA_MAX_RETRIES");
        let retry_base_delay_ms: Option<u64> = get_env_or_none("ETNA_RETRY_BASE_DELAY_MS");

        Self {
            max_retry_count,
            retry_base_delay_ms,
        }
    }
}
