//! Retry policy for calls to the generation service.

use serde::{Deserialize, Serialize};

/// Bounded exponential-backoff policy applied to every external call.
///
/// Each retryable error carries its own strategy hint
/// `(initial_backoff_ms, max_retries, max_delay_secs)`; any value set here
/// overrides the hint.
///
/// ```toml
/// [retry]
/// enabled = true
/// max_retries = 3
/// initial_backoff_ms = 500
/// max_delay_secs = 20
/// ```
///
/// # Examples
///
/// ```
/// use inkwell_config::RetryPolicy;
///
/// let policy = RetryPolicy { max_retries: Some(2), ..RetryPolicy::default() };
/// assert_eq!(policy.resolve((5000, 3, 40)), (5000, 2, 40));
/// assert_eq!(RetryPolicy::disabled().resolve((5000, 3, 40)).1, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RetryPolicy {
    /// Whether failed calls are retried at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Maximum retries after the first attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<usize>,
    /// Initial backoff delay in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_backoff_ms: Option<u64>,
    /// Cap on a single backoff delay in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_delay_secs: Option<u64>,
}

fn default_enabled() -> bool {
    true
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: None,
            initial_backoff_ms: None,
            max_delay_secs: None,
        }
    }
}

impl RetryPolicy {
    /// A policy that attempts every call exactly once.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Apply this policy's overrides to an error's strategy hint.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`. A disabled
    /// policy always yields zero retries.
    pub fn resolve(&self, hint: (u64, usize, u64)) -> (u64, usize, u64) {
        let (initial_ms, retries, max_delay) = hint;
        let retries = if self.enabled {
            self.max_retries.unwrap_or(retries)
        } else {
            0
        };
        (
            self.initial_backoff_ms.unwrap_or(initial_ms),
            retries,
            self.max_delay_secs.unwrap_or(max_delay),
        )
    }
}
