#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Remote rated-point source.
//!
//! Fetches the raw JSON body from the point endpoint and decodes it into
//! [`RatedPoint`]s. The [`PointSource`] trait is the seam the screen
//! orchestration is driven and tested through; [`HttpPointSource`] is the
//! production implementation.

pub mod fetch;
pub mod retry;

use async_trait::async_trait;
use gheatmap_points::DecodeError;
use gheatmap_points_models::RatedPoint;

pub use fetch::FetchError;

/// Errors from the fetch→decode pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The HTTP fetch failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A provider of rated heatmap points.
#[async_trait]
pub trait PointSource: Send + Sync {
    /// Fetches and decodes the full point set.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch or the decode fails.
    async fn fetch_points(&self) -> Result<Vec<RatedPoint>, SourceError>;
}

/// [`PointSource`] backed by a single HTTP GET to a fixed endpoint.
pub struct HttpPointSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPointSource {
    /// Creates a source for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            client: fetch::client()?,
            url: url.into(),
        })
    }

    /// Endpoint URL this source fetches from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PointSource for HttpPointSource {
    async fn fetch_points(&self) -> Result<Vec<RatedPoint>, SourceError> {
        let body = fetch::fetch(&self.client, &self.url).await?;
        Ok(gheatmap_points::decode::decode(&body)?)
    }
}
