//! Backlink scraping through a headless browser.
//!
//! The backlink report is rendered client-side, so a plain HTTP fetch sees an
//! empty table. A scrape launches a fresh browser, loads the report page, gives
//! its scripts a settle delay, waits for the first table row and then reads the
//! rendered DOM. The browser is held by [`SessionGuard`] for the whole scrape and
//! closed on every exit path.

mod browser;
mod extract;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::config::{
    BACKLINK_ROW_SELECTOR, BACKLINK_SETTLE_DELAY_SECS, BACKLINK_TABLE_TIMEOUT_SECS,
};

pub use browser::{BrowserLauncher, BrowserSession, ChromeLauncher};
pub use extract::{extract_backlinks, BacklinkRecord};

/// Why a scrape produced no backlinks.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to launch browser: {0:#}")]
    Launch(anyhow::Error),

    #[error("Failed to load backlink report: {0:#}")]
    Navigation(anyhow::Error),

    /// The results table never rendered within the wait window.
    #[error("Backlink table did not appear within {0:?}")]
    TableNotFound(Duration),

    #[error("Failed to read backlink table: {0:#}")]
    Extraction(anyhow::Error),

    #[error("Scrape task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Closes the wrapped session when dropped.
pub struct SessionGuard {
    session: Box<dyn BrowserSession>,
}

impl SessionGuard {
    pub fn new(session: Box<dyn BrowserSession>) -> Self {
        Self { session }
    }
}

impl std::ops::Deref for SessionGuard {
    type Target = dyn BrowserSession;

    fn deref(&self) -> &Self::Target {
        self.session.as_ref()
    }
}

impl std::ops::DerefMut for SessionGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.session.as_mut()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.session.close();
    }
}

/// Scrapes the first rows of a third-party backlink report.
#[derive(Clone)]
pub struct BacklinkScraper {
    launcher: Arc<dyn BrowserLauncher>,
    report_base: String,
    settle_delay: Duration,
    table_timeout: Duration,
}

impl BacklinkScraper {
    /// Creates a scraper with the default settle delay and table wait.
    pub fn new(launcher: Arc<dyn BrowserLauncher>, report_base: impl Into<String>) -> Self {
        Self {
            launcher,
            report_base: report_base.into(),
            settle_delay: Duration::from_secs(BACKLINK_SETTLE_DELAY_SECS),
            table_timeout: Duration::from_secs(BACKLINK_TABLE_TIMEOUT_SECS),
        }
    }

    pub fn with_timings(mut self, settle_delay: Duration, table_timeout: Duration) -> Self {
        self.settle_delay = settle_delay;
        self.table_timeout = table_timeout;
        self
    }

    /// Report page for `domain`.
    pub fn report_url(&self, domain: &str) -> String {
        format!("{}http://{}", self.report_base, domain)
    }

    /// Runs the scrape on the blocking pool.
    pub async fn scrape(&self, domain: &str) -> Result<Vec<BacklinkRecord>, ScrapeError> {
        let scraper = self.clone();
        let domain = domain.to_string();
        tokio::task::spawn_blocking(move || scraper.scrape_blocking(&domain)).await?
    }

    /// Synchronous scrape; the session is closed before this returns.
    pub fn scrape_blocking(&self, domain: &str) -> Result<Vec<BacklinkRecord>, ScrapeError> {
        let url = self.report_url(domain);
        info!("Scraping backlinks for {domain} from {url}");

        let session = self.launcher.launch().map_err(ScrapeError::Launch)?;
        let mut session = SessionGuard::new(session);

        session.navigate(&url).map_err(ScrapeError::Navigation)?;

        // Report scripts fill the table after load
        if !self.settle_delay.is_zero() {
            std::thread::sleep(self.settle_delay);
        }

        let found = session
            .wait_for(BACKLINK_ROW_SELECTOR, self.table_timeout)
            .map_err(ScrapeError::Extraction)?;
        if !found {
            return Err(ScrapeError::TableNotFound(self.table_timeout));
        }

        let html = session.content().map_err(ScrapeError::Extraction)?;
        let backlinks = extract_backlinks(&html);
        debug!("Extracted {} backlinks for {domain}", backlinks.len());

        Ok(backlinks)
    }
}
