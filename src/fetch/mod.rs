//! Page fetching.
//!
//! The meta tag and heading analyzers work on HTML fetched here. The fetcher sits
//! behind the [`PageFetcher`] trait so handlers can be tested without a network.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::config::MAX_RESPONSE_BODY_SIZE;

/// Source of raw HTML for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns its body as text.
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpPageFetcher {
    /// Wraps an already configured client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("Fetching page {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;

        if let Some(len) = response.content_length() {
            if len as usize > MAX_RESPONSE_BODY_SIZE {
                return Err(anyhow::anyhow!(
                    "Response from {} too large: {} bytes (limit {})",
                    url,
                    len,
                    MAX_RESPONSE_BODY_SIZE
                ));
            }
        }

        // .text() handles charset decoding and decompression
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {url}"))?;

        if body.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(anyhow::anyhow!(
                "Body from {} too large: {} bytes (limit {})",
                url,
                body.len(),
                MAX_RESPONSE_BODY_SIZE
            ));
        }

        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
