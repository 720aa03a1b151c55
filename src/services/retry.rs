use std::{future::Future, time::Duration};

use crate::errors::GeneratorError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Bounded retry with a fixed pause between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Runs `op` until it succeeds, fails with a non-retryable error, or the
    /// attempt budget is spent. The last error is returned.
    ///
    /// `op` receives the 1-based attempt number.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, GeneratorError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, GeneratorError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) if attempt >= max_attempts => {
                    log::error!(
                        "{} failed after {} attempts: {}",
                        label,
                        attempt,
                        err
                    );
                    return Err(err);
                }
                Err(err) => {
                    log::warn!(
                        "{} failed (attempt {}/{}): {}",
                        label,
                        attempt,
                        max_attempts,
                        err
                    );
                    if !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::ZERO)
    }

    #[tokio::test]
    async fn run_stops_at_first_success() {
        let calls = AtomicU32::new(0);

        let result = fast_policy()
            .run("test", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 2 {
                        Err(GeneratorError::Transport("connection reset".into()))
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.expect("second attempt should succeed"), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn run_makes_exactly_max_attempts_on_persistent_failure() {
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = fast_policy()
            .run("test", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(GeneratorError::Parse(format!("attempt {}", attempt))) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match result {
            Err(GeneratorError::Parse(msg)) => assert_eq!(msg, "attempt 3"),
            other => panic!("expected last parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn run_does_not_retry_missing_configuration() {
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = fast_policy()
            .run("test", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(GeneratorError::NotConfigured) }
            })
            .await;

        assert!(matches!(result, Err(GeneratorError::NotConfigured)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn new_clamps_attempts_to_at_least_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
        assert_eq!(RetryPolicy::default().max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(RetryPolicy::default().backoff, DEFAULT_BACKOFF);
    }
}
