//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use reqwest::ClientBuilder;

/// Initializes the shared HTTP client used for page fetches and PageSpeed calls.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Timeout from config
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .use_rustls_tls()
        .build()?;
    Ok(Arc::new(client))
}
