//! Bounded retry with exponential backoff for transient catalog failures.
//!
//! The upstream catalog service sits behind shared cloud infrastructure and
//! occasionally answers with 5xx or drops connections; those are worth one
//! or two more attempts. Parse failures and client errors are propagated
//! immediately; repeating the request cannot change the outcome.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Returns `true` if `err` is a transient condition worth retrying.
///
/// Retriable:
/// - [`CatalogError::Http`] — network-level failure (reset, timeout, DNS).
/// - [`CatalogError::UnexpectedStatus`] with 429 or any 5xx.
///
/// Everything else (4xx statuses, body parse failures, envelope rejections)
/// is returned immediately.
fn is_retriable(err: &CatalogError) -> bool {
    match err {
        CatalogError::Http(_) => true,
        CatalogError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

/// Executes `operation`, retrying transient errors with exponential backoff.
///
/// The wait before the n-th retry is `backoff_base_secs * 2^(n-1)` seconds;
/// `max_retries` counts additional attempts after the first, so `0` means a
/// single attempt with no retries. When retries are exhausted the last error
/// is returned.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                err
            }
        };

        // base * 2^attempt, exponent capped so the shift cannot overflow.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient catalog error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
