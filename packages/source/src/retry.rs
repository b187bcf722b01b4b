//! HTTP retry for transient errors.
//!
//! [`send_text`] wraps `reqwest::RequestBuilder::send()` with bounded
//! retry and exponential backoff so a flaky connection does not surface
//! as an immediate failure. Permanent client errors are not retried.

use std::time::Duration;

use crate::FetchError;

/// Maximum number of retry attempts for transient HTTP errors
/// (connection failures, timeouts, server errors, rate limiting).
///
/// With exponential backoff (2s, 4s, 8s) the total wait before giving
/// up is 14 seconds on top of the per-attempt request timeout.
const MAX_RETRIES: u32 = 3;

/// Sends an HTTP request and returns the response body as a `String`.
///
/// The `build_request` closure is called on each attempt to construct a
/// fresh [`reqwest::RequestBuilder`] (builders are consumed by `.send()`).
///
/// Retries connection errors, timeouts, HTTP 429, and HTTP 5xx up to
/// [`MAX_RETRIES`] times with exponential backoff. Other HTTP 4xx
/// statuses are permanent and fail immediately.
///
/// # Errors
///
/// Returns [`FetchError`] if the request still fails after all retries,
/// the server returns a non-success status, or the body cannot be read.
#[allow(clippy::future_not_send)]
pub async fn send_text<F>(build_request: F) -> Result<String, FetchError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_secs(1u64 << attempt); // 2s, 4s, 8s
            log::warn!("  retry {attempt}/{MAX_RETRIES} in {delay:?}...");
            tokio::time::sleep(delay).await;
        }

        match build_request().send().await {
            Err(e) if is_transient(&e) && attempt < MAX_RETRIES => {
                log::warn!("  transient error: {e}");
            }
            Err(e) => return Err(FetchError::NetworkFailure(e)),
            Ok(response) => {
                let status = response.status();

                // 429 and 5xx are worth another attempt; every other
                // status resolves this call.
                if (status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error())
                    && attempt < MAX_RETRIES
                {
                    log::warn!("  HTTP {status}");
                    continue;
                }

                let response = response.error_for_status()?;
                return Ok(response.text().await?);
            }
        }
    }

    unreachable!("send_text retry loop exited without returning")
}

/// Returns `true` if the error is likely transient and worth retrying.
fn is_transient(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect() || e.is_body() || e.is_decode() || e.is_request()
}
