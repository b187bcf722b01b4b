//! Single-endpoint HTTP fetch.
//!
//! One GET to the configured URL, returning the full response body as
//! text. Transient failures are retried through [`crate::retry`].

use std::time::Duration;

use crate::retry;

/// Per-request timeout. The transport default (none) would let a wedged
/// connection pin the overlay pipeline indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = "gheatmap/0.1";

/// Errors that can occur while fetching the point payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure, non-success HTTP status, or unreadable
    /// response body.
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),
}

/// Builds the shared HTTP client with the product timeout and user agent.
///
/// # Errors
///
/// Returns [`FetchError`] if the TLS backend cannot be initialized.
pub fn client() -> Result<reqwest::Client, FetchError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Fetches the full response body from `url` as text.
///
/// # Errors
///
/// Returns [`FetchError::NetworkFailure`] on any transport failure
/// (after retries), a non-success HTTP status, or a body that cannot be
/// read.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    retry::send_text(|| client.get(url)).await
}
