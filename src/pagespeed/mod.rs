//! PageSpeed Insights client.
//!
//! Forwards a target URL to the PageSpeed Insights v5 `runPagespeed` endpoint and
//! hands back the JSON body untouched.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use strum_macros::{Display, EnumString};

/// Device profile PageSpeed emulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    Mobile,
    Desktop,
}

/// Runs a PageSpeed analysis.
#[async_trait]
pub trait PageSpeedApi: Send + Sync {
    /// Returns the raw PageSpeed report for `url`.
    async fn run(&self, url: &str, strategy: Option<Strategy>) -> Result<serde_json::Value>;
}

/// [`PageSpeedApi`] calling the Google endpoint over HTTP.
#[derive(Clone)]
pub struct PageSpeedClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: Option<String>,
}

impl PageSpeedClient {
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    fn query_params(&self, url: &str, strategy: Option<Strategy>) -> Vec<(&str, String)> {
        let mut params = vec![("url", url.to_string())];
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        if let Some(strategy) = strategy {
            params.push(("strategy", strategy.to_string()));
        }
        params
    }
}

#[async_trait]
impl PageSpeedApi for PageSpeedClient {
    async fn run(&self, url: &str, strategy: Option<Strategy>) -> Result<serde_json::Value> {
        info!("Requesting PageSpeed report for {url}");
        if self.api_key.is_none() {
            debug!("No PageSpeed API key configured, sending unauthenticated request");
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_params(url, strategy))
            .send()
            .await
            .context("PageSpeed request failed")?
            .error_for_status()
            .context("PageSpeed returned an error status")?;

        let report = response
            .json::<serde_json::Value>()
            .await
            .context("PageSpeed response was not valid JSON")?;

        debug!("PageSpeed report received for {url}");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
    use std::str::FromStr;

    fn client_for(server: &Server, api_key: Option<&str>) -> PageSpeedClient {
        PageSpeedClient::new(
            Arc::new(reqwest::Client::new()),
            server.url_str("/runPagespeed"),
            api_key.map(str::to_string),
        )
    }

    #[test]
    fn test_strategy_parsing_is_case_insensitive() {
        assert_eq!(Strategy::from_str("mobile").unwrap(), Strategy::Mobile);
        assert_eq!(Strategy::from_str("DESKTOP").unwrap(), Strategy::Desktop);
        assert!(Strategy::from_str("tablet").is_err());
        assert_eq!(Strategy::Mobile.to_string(), "mobile");
    }

    #[tokio::test]
    async fn test_run_relays_body_and_forwards_params() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/runPagespeed"),
                request::query(url_decoded(contains(("url", "https://example.com/")))),
                request::query(url_decoded(contains(("key", "secret")))),
                request::query(url_decoded(contains(("strategy", "mobile")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "lighthouseResult": {"categories": {"performance": {"score": 0.93}}}
            }))),
        );

        let report = client_for(&server, Some("secret"))
            .run("https://example.com/", Some(Strategy::Mobile))
            .await
            .unwrap();
        assert_eq!(
            report["lighthouseResult"]["categories"]["performance"]["score"],
            0.93
        );
    }

    #[tokio::test]
    async fn test_run_omits_key_when_unset() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/runPagespeed"),
                request::query(url_decoded(not(contains(key("key"))))),
                request::query(url_decoded(not(contains(key("strategy"))))),
            ])
            .respond_with(json_encoded(serde_json::json!({"id": "https://example.com/"}))),
        );

        let report = client_for(&server, None)
            .run("https://example.com/", None)
            .await
            .unwrap();
        assert_eq!(report["id"], "https://example.com/");
    }

    #[tokio::test]
    async fn test_run_upstream_error_status_fails() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/runPagespeed"))
                .respond_with(status_code(429).body(r#"{"error":{"code":429}}"#)),
        );

        let err = client_for(&server, Some("secret"))
            .run("https://example.com/", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("error status"));
    }
}
