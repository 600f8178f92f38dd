//! seo_audit library: website audit checks behind a small HTTP API
//!
//! This library provides the checks the `seo_audit` server exposes: PageSpeed
//! Insights relay, WHOIS summary, meta tag and heading analysis, TLS certificate
//! inspection and backlink scraping.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     google_api_key: Some("my-key".to_string()),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The backlink check additionally needs a
//! Chrome or Chromium binary on the host.

mod app;
pub mod backlinks;
pub mod config;
mod domain;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod pagespeed;
pub mod parse;
pub mod server;
pub mod tls;
mod utils;
pub mod whois;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel};
pub use domain::registrable_domain;
pub use error_handling::{AuditError, InitializationError};
pub use server::{build_router, AppState};

/// Validates `config`, builds the production collaborators and serves until
/// Ctrl-C or SIGTERM.
///
/// The caller is expected to have initialized logging and the rustls crypto
/// provider (see [`initialization`]).
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot be
/// built, or the listener cannot bind.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    config.validate().map_err(InitializationError::from)?;

    let state = AppState::from_config(&config)?;
    if config.google_api_key.is_none() {
        log::warn!("GOOGLE_API_KEY is not set; PageSpeed requests will be unauthenticated");
    }

    server::start_server(&config, state).await
}
