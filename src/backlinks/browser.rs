//! Headless browser seam.
//!
//! `headless_chrome` is a blocking API, so everything here is synchronous and is
//! driven from `spawn_blocking` by the scraper.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use log::{debug, warn};

/// Starts a fresh browser for one scrape.
pub trait BrowserLauncher: Send + Sync {
    fn launch(&self) -> Result<Box<dyn BrowserSession>>;
}

/// One browser process with a single tab, exclusively owned by a scrape.
pub trait BrowserSession: Send {
    /// Loads `url` and waits for the navigation to finish.
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Waits up to `timeout` for `selector` to match.
    ///
    /// Returns `Ok(false)` when the wait timed out.
    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<bool>;

    /// Returns the current rendered DOM as HTML.
    fn content(&mut self) -> Result<String>;

    /// Shuts the browser down. Must be safe to call more than once.
    fn close(&mut self);
}

/// [`BrowserLauncher`] starting headless Chrome/Chromium.
#[derive(Debug, Clone)]
pub struct ChromeLauncher {
    chrome_path: Option<PathBuf>,
    idle_timeout: Duration,
}

impl ChromeLauncher {
    /// `chrome_path` of `None` lets `headless_chrome` locate the binary itself.
    pub fn new(chrome_path: Option<PathBuf>, idle_timeout: Duration) -> Self {
        Self {
            chrome_path,
            idle_timeout,
        }
    }
}

impl BrowserLauncher for ChromeLauncher {
    fn launch(&self) -> Result<Box<dyn BrowserSession>> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .path(self.chrome_path.clone())
            .idle_browser_timeout(self.idle_timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid browser launch options: {e}"))?;

        let browser = Browser::new(options).context("Failed to launch headless browser")?;
        let tab = browser.new_tab().context("Failed to open browser tab")?;
        debug!("Launched headless browser");

        Ok(Box::new(ChromeSession {
            browser: Some(browser),
            tab: Some(tab),
        }))
    }
}

struct ChromeSession {
    browser: Option<Browser>,
    tab: Option<Arc<Tab>>,
}

impl ChromeSession {
    fn tab(&self) -> Result<&Arc<Tab>> {
        self.tab
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Browser session already closed"))
    }
}

impl BrowserSession for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab()?
            .navigate_to(url)
            .with_context(|| format!("Failed to navigate to {url}"))?
            .wait_until_navigated()
            .with_context(|| format!("Navigation to {url} did not complete"))?;
        Ok(())
    }

    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<bool> {
        match self
            .tab()?
            .wait_for_element_with_custom_timeout(selector, timeout)
        {
            Ok(_) => Ok(true),
            Err(e) if e.downcast_ref::<headless_chrome::util::Timeout>().is_some() => Ok(false),
            Err(e) => Err(e.context(format!("Failed while waiting for '{selector}'"))),
        }
    }

    fn content(&mut self) -> Result<String> {
        self.tab()?
            .get_content()
            .context("Failed to read rendered page content")
    }

    fn close(&mut self) {
        if let Some(tab) = self.tab.take() {
            if let Err(e) = tab.close(false) {
                warn!("Failed to close browser tab: {e}");
            }
        }
        // Dropping the browser kills the Chrome process
        if self.browser.take().is_some() {
            debug!("Headless browser closed");
        }
    }
}
