//! Exponential back-off with jitter for Photon requests.
//!
//! Only transient failures are retried: timeouts, refused connections,
//! HTTP 429 and 5xx. Anything else comes back on the first attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::UpstreamError;

const MAX_DELAY_MS: u64 = 10_000;

pub(crate) fn is_retriable(err: &UpstreamError) -> bool {
    match err {
        UpstreamError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        UpstreamError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        UpstreamError::Deserialize { .. }
        | UpstreamError::InvalidCoordinate(_)
        | UpstreamError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The n-th retry waits `backoff_base_ms * 2^(n-1)` ± 25 %, capped at 10 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, UpstreamError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient upstream error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn status(status: u16) -> UpstreamError {
        UpstreamError::UnexpectedStatus {
            status,
            url: "http://photon.test/api/".to_owned(),
        }
    }

    #[test]
    fn server_errors_and_throttling_are_retriable() {
        assert!(is_retriable(&status(503)));
        assert!(is_retriable(&status(429)));
    }

    #[test]
    fn client_errors_are_not_retriable() {
        assert!(!is_retriable(&status(400)));
        assert!(!is_retriable(&status(404)));
        assert!(!is_retriable(&UpstreamError::InvalidCoordinate("x".to_owned())));
    }

    #[tokio::test]
    async fn retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                if c.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(status(502))
                } else {
                    Ok::<u32, UpstreamError>(7)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(1, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, UpstreamError>(status(500))
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(matches!(
            result,
            Err(UpstreamError::UnexpectedStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn non_retriable_error_returns_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(5, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, UpstreamError>(status(404))
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(result.is_err());
    }
}
