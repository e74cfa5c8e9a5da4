//! Bounded poll-until-ready helper.
//!
//! The ordering service is eventually consistent: a freshly registered
//! account or a freshly placed order is not always visible to the very next
//! read. Rather than sleeping for a fixed interval, dependent reads are
//! retried with exponential backoff until they report ready or a timeout
//! elapses.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, timeout, Instant};
use tracing::debug;

use crate::error::TestError;

#[derive(Debug, Clone, PartialEq)]
pub struct PollConfig {
    /// Delay before the second attempt
    pub initial_delay: Duration,
    /// Upper bound for a single delay
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Total time budget across all attempts
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_millis(800),
            backoff_multiplier: 2.0,
            timeout: Duration::from_secs(5),
        }
    }
}

impl PollConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Delay after the given (1-based) failed attempt.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let delay_ms =
            self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(exponent);
        let capped_ms = delay_ms.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped_ms as u64)
    }
}

/// Reruns `op` until `ready` accepts its output.
///
/// Errors from `op` count as "not ready yet". An attempt still running when
/// the budget runs out is abandoned. Returns the first ready value, or
/// [`TestError::Timeout`] once the budget is spent.
pub async fn poll_until<T, E, F, Fut, R>(
    config: &PollConfig,
    what: &str,
    mut op: F,
    ready: R,
) -> Result<T, TestError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    R: Fn(&T) -> bool,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;
    let mut last_error: Option<String> = None;

    loop {
        attempt += 1;

        let remaining = config.timeout.saturating_sub(started.elapsed());
        let Ok(outcome) = timeout(remaining, op()).await else {
            return Err(TestError::Timeout(format!(
                "{} not ready after {} attempts in {:?}; last attempt did not finish",
                what,
                attempt,
                started.elapsed()
            )));
        };

        match outcome {
            Ok(value) if ready(&value) => {
                debug!(what, attempt, elapsed = ?started.elapsed(), "Ready");
                return Ok(value);
            }
            Ok(_) => {
                debug!(what, attempt, "Not ready yet");
                last_error = None;
            }
            Err(e) => {
                debug!(what, attempt, error = %e, "Attempt failed");
                last_error = Some(e.to_string());
            }
        }

        let delay = config.delay_after(attempt);
        if started.elapsed() + delay > config.timeout {
            let cause = last_error
                .map(|e| format!("; last error: {}", e))
                .unwrap_or_default();
            return Err(TestError::Timeout(format!(
                "{} not ready after {} attempts in {:?}{}",
                what,
                attempt,
                started.elapsed(),
                cause
            )));
        }

        sleep(delay).await;
    }
}
