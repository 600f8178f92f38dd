//! Server state and request/response bodies.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backlinks::{BacklinkRecord, BacklinkScraper, ChromeLauncher};
use crate::config::{Config, BROWSER_IDLE_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::initialization::init_client;
use crate::pagespeed::{PageSpeedApi, PageSpeedClient};
use crate::parse::{HeadingReport, MetaResult};
use crate::tls::{CertificateProbe, RustlsProbe};
use crate::whois::{WhoisLookup, WhoisServiceLookup};

/// Collaborators shared by every handler.
///
/// Each one is behind a trait object so the router can run against fakes.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub certificates: Arc<dyn CertificateProbe>,
    pub whois: Arc<dyn WhoisLookup>,
    pub pagespeed: Arc<dyn PageSpeedApi>,
    pub backlinks: BacklinkScraper,
}

impl AppState {
    /// Builds the production collaborators from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let launcher = ChromeLauncher::new(
            config.chrome_path.clone(),
            Duration::from_secs(BROWSER_IDLE_TIMEOUT_SECS),
        );

        Ok(Self {
            fetcher: Arc::new(HttpPageFetcher::new(Arc::clone(&client))),
            certificates: Arc::new(RustlsProbe::new()),
            whois: Arc::new(WhoisServiceLookup::new(Duration::from_secs(
                config.whois_timeout_seconds,
            ))),
            pagespeed: Arc::new(PageSpeedClient::new(
                client,
                config.pagespeed_endpoint.clone(),
                config.google_api_key.clone(),
            )),
            backlinks: BacklinkScraper::new(
                Arc::new(launcher),
                config.backlink_report_base.clone(),
            ),
        })
    }
}

/// Body of `/api/seo-audit`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageSpeedRequest {
    pub url: Option<String>,
    pub strategy: Option<String>,
}

/// Body of the endpoints keyed by `url`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UrlRequest {
    pub url: Option<String>,
}

/// Body of the endpoints keyed by `siteUrl`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteUrlRequest {
    pub site_url: Option<String>,
}

/// Returns the trimmed field, treating blank strings as absent.
pub(crate) fn required(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
pub struct MetaAnalysisResponse {
    pub success: bool,
    pub meta: MetaResult,
}

#[derive(Debug, Serialize)]
pub struct HeadingStructureResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: HeadingReport,
}

#[derive(Debug, Serialize)]
pub struct BacklinkResponse {
    pub domain: String,
    pub backlinks: Vec<BacklinkRecord>,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
