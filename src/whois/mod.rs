// whois/mod.rs
// WHOIS/RDAP domain lookup using whois-service crate

//! WHOIS lookups.
//!
//! [`WhoisServiceLookup`] delegates server discovery, RDAP-then-WHOIS fallback
//! and field parsing to the `whois-service` crate and projects its answer onto
//! a [`WhoisRecord`].

mod types;

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use whois_service::{WhoisClient, WhoisResponse};

use crate::config::DEFAULT_WHOIS_TIMEOUT_SECS;

pub use types::{WhoisRecord, WhoisSummary, NOT_AVAILABLE};

/// Raw-text keys for the registry's echo of the domain name.
const DOMAIN_NAME_KEYS: &[&str] = &["Domain Name", "domain"];
/// Raw-text keys for the registrant organization, which the parsed data lacks.
const REGISTRANT_ORG_KEYS: &[&str] = &["Registrant Organization", "Registrant Organisation"];
const REGISTRAR_KEYS: &[&str] = &["Registrar", "Sponsoring Registrar"];

/// Looks up registration data for a domain.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord>;
}

/// [`WhoisLookup`] backed by [`whois_service::WhoisClient`].
#[derive(Debug, Clone)]
pub struct WhoisServiceLookup {
    timeout: Duration,
}

impl Default for WhoisServiceLookup {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_WHOIS_TIMEOUT_SECS))
    }
}

impl WhoisServiceLookup {
    /// Creates a lookup that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl WhoisLookup for WhoisServiceLookup {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        info!("Starting WHOIS lookup for domain: {domain}");

        let response = tokio::time::timeout(self.timeout, async {
            // New client per lookup since it's lightweight
            let client = WhoisClient::new()
                .await
                .map_err(|e| anyhow!("Failed to create WHOIS client: {e}"))?;
            client
                .lookup(domain)
                .await
                .map_err(|e| anyhow!("WHOIS lookup failed for {domain}: {e}"))
        })
        .await
        .with_context(|| format!("WHOIS lookup for {domain} timed out after {:?}", self.timeout))??;

        let record = convert_response(&response);
        if record.domain_name.is_none() && record.registrar.is_none() {
            bail!("No WHOIS record found for {domain}");
        }

        info!("WHOIS lookup successful for {domain}");
        Ok(record)
    }
}

/// Converts a whois-service response to our [`WhoisRecord`].
fn convert_response(response: &WhoisResponse) -> WhoisRecord {
    let (registrar, registrant_name) = match &response.parsed_data {
        Some(parsed) => (parsed.registrar.as_deref(), parsed.registrant_name.as_deref()),
        None => {
            debug!("No parsed WHOIS data, reading raw text only");
            (None, None)
        }
    };
    build_record(&response.raw_data, registrar, registrant_name)
}

/// Combines the crate's parsed fields with the ones it leaves in the raw text.
fn build_record(raw: &str, registrar: Option<&str>, registrant_name: Option<&str>) -> WhoisRecord {
    WhoisRecord {
        domain_name: raw_field(raw, DOMAIN_NAME_KEYS),
        registrant_organization: raw_field(raw, REGISTRANT_ORG_KEYS)
            .or_else(|| non_empty(registrant_name)),
        registrar: non_empty(registrar).or_else(|| raw_field(raw, REGISTRAR_KEYS)),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First non-empty `Key: value` line whose key matches, trying `keys` in order.
fn raw_field(raw: &str, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|wanted| {
        raw.lines().find_map(|line| {
            let (key, value) = line.trim().split_once(':')?;
            if !key.trim().eq_ignore_ascii_case(wanted) {
                return None;
            }
            non_empty(Some(value))
        })
    })
}
