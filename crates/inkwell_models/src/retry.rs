//! Bounded exponential-backoff retry for calls to the generation service.
//!
//! The first attempt runs bare. If it fails with a retryable error, that
//! error's strategy hint (adjusted by the [`RetryPolicy`]) decides how many
//! more attempts follow and how long to wait between them.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::jitter};
use tracing::{info, instrument, warn};

use inkwell_config::RetryPolicy;
use inkwell_core::{GenerateRequest, GenerateResponse};
use inkwell_error::{InkwellResult, RetryableError};
use inkwell_interface::InkwellDriver;

/// Delays that double from `initial_ms`, each capped at `max_delay_secs`.
///
/// The iterator is unbounded; callers `take` the number of retries.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use inkwell_models::backoff_schedule;
///
/// let delays: Vec<_> = backoff_schedule(500, 2).take(4).collect();
/// assert_eq!(
///     delays,
///     vec![
///         Duration::from_millis(500),
///         Duration::from_millis(1000),
///         Duration::from_millis(2000),
///         Duration::from_millis(2000),
///     ]
/// );
/// ```
pub fn backoff_schedule(initial_ms: u64, max_delay_secs: u64) -> impl Iterator<Item = Duration> {
    let cap = Duration::from_secs(max_delay_secs);
    (0u32..).map(move |attempt| {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(initial_ms.saturating_mul(factor)).min(cap)
    })
}

/// Run `operation`, retrying retryable failures under `policy`.
///
/// Permanent errors and exhausted retries return the last error unchanged.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> InkwellResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = InkwellResult<T>>,
{
    // Try once to get the error-specific strategy
    let first_error = match operation().await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if !first_error.is_retryable() {
        warn!(operation = operation_name, error = %first_error, "Permanent error, failing immediately");
        return Err(first_error);
    }

    let (initial_ms, max_retries, max_delay_secs) =
        policy.resolve(first_error.retry_strategy_params());
    if max_retries == 0 {
        warn!(operation = operation_name, error = %first_error, "Retry disabled, failing");
        return Err(first_error);
    }

    info!(
        operation = operation_name,
        error = %first_error,
        initial_backoff_ms = initial_ms,
        max_retries,
        max_delay_secs,
        "Call failed, will retry with configured strategy"
    );

    let strategy = backoff_schedule(initial_ms, max_delay_secs)
        .map(jitter)
        .take(max_retries);

    Retry::spawn(strategy, || {
        let attempt = operation();
        async move {
            match attempt.await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(operation = operation_name, error = %e, "Call failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(operation = operation_name, error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await
}

/// Driver wrapper that applies a [`RetryPolicy`] to every call.
///
/// # Examples
///
/// ```no_run
/// use inkwell_config::{InkwellConfig, RetryPolicy};
/// use inkwell_models::{GeminiClient, RetryingDriver};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = InkwellConfig::load()?;
/// let driver = RetryingDriver::new(GeminiClient::new(&config.gemini)?, config.retry);
/// assert!(driver.policy().enabled);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RetryingDriver<D> {
    inner: D,
    policy: RetryPolicy,
}

impl<D: InkwellDriver> RetryingDriver<D> {
    /// Wrap `inner` with `policy`.
    pub fn new(inner: D, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// The wrapped driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// The policy applied to every call.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<D: InkwellDriver> InkwellDriver for RetryingDriver<D> {
    #[instrument(skip(self, req), fields(provider = self.inner.provider_name()))]
    async fn generate(&self, req: &GenerateRequest) -> InkwellResult<GenerateResponse> {
        with_retry(&self.policy, "generate", || self.inner.generate(req)).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
