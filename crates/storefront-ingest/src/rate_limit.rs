//! Retry utilities for sheet downloads.
//!
//! Exponential backoff for transient failures: network errors, 429 and 5xx
//! responses. Everything else is returned to the caller on the first try.

use std::future::Future;
use std::time::Duration;

use crate::error::IngestError;

/// Returns `true` if `err` represents a transient condition worth retrying.
fn is_retriable(err: &IngestError) -> bool {
    match err {
        IngestError::Http(_) => true,
        IngestError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        IngestError::EmptyCatalog { .. } | IngestError::InvalidSheetUrl { .. } => false,
    }
}

/// Executes `operation`, retrying retriable errors with exponential backoff.
///
/// Sleeps `backoff_base_secs * 2^attempt` seconds between attempts and makes
/// at most `max_retries` additional attempts after the first. The last error
/// is returned once retries are exhausted.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, IngestError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, IngestError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient sheet fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn status(status: u16) -> IngestError {
        IngestError::UnexpectedStatus {
            status,
            url: "https://sheet.example.com/export".to_owned(),
        }
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, IngestError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_server_errors_then_succeeds() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                let n = cc.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(status(503))
                } else {
                    Ok::<u32, IngestError>(7)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn propagates_last_error_after_exhausting_retries() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(2, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, IngestError>(status(429))
            }
        })
        .await;
        // max_retries=2 → 3 total attempts
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
        assert!(matches!(
            result,
            Err(IngestError::UnexpectedStatus { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn does_not_retry_client_errors() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, IngestError>(status(404))
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result,
            Err(IngestError::UnexpectedStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn does_not_retry_empty_catalog() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, IngestError>(IngestError::EmptyCatalog {
                    url: "https://sheet.example.com/export".to_owned(),
                    skipped_rows: 0,
                })
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(IngestError::EmptyCatalog { .. })));
    }
}
