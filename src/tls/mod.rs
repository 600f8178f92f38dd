//! TLS certificate inspection.
//!
//! Connects to a host on port 443 and reports on the certificate it presents:
//! - Certificate subject and issuer
//! - Validity period and whole days until expiry
//! - Subject Alternative Names (DNS names only)
//!
//! Uses `tokio-rustls` for the handshake (trusting the `webpki-roots` set) and
//! `x509-parser` for certificate decoding.

mod extract;
mod report;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use rustls::pki_types::ServerName;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;
use url::Url;

use crate::config::{HTTPS_PORT, TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS};

pub use report::{days_left, CertificateDetails, CertificateReport};

/// The leaf certificate a server presented, reduced to the reported fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerCertificate {
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub subject_alt_names: Vec<String>,
}

/// Failure to obtain a certificate over the network.
#[derive(Error, Debug)]
pub enum CertificateError {
    /// The host is not a valid TLS server name.
    #[error("Invalid server name '{host}': {reason}")]
    InvalidServerName { host: String, reason: String },

    /// TCP connect failed or timed out.
    #[error("Failed to connect to {host}:{port}: {reason}")]
    Connect {
        host: String,
        port: u16,
        reason: String,
    },

    /// TLS handshake failed or timed out.
    #[error("TLS handshake with {host} failed: {reason}")]
    Handshake { host: String, reason: String },

    /// Certificate bytes could not be decoded.
    #[error("Failed to decode certificate from {host}: {source:#}")]
    Decode {
        host: String,
        source: anyhow::Error,
    },
}

/// Something that can fetch the peer certificate of a host.
#[async_trait]
pub trait CertificateProbe: Send + Sync {
    /// Returns the leaf certificate presented by `host`, or `None` when the
    /// handshake completed without one.
    async fn peer_certificate(&self, host: &str) -> Result<Option<PeerCertificate>, CertificateError>;
}

/// [`CertificateProbe`] that performs a real rustls handshake on port 443.
#[derive(Clone)]
pub struct RustlsProbe {
    connector: TlsConnector,
    connect_timeout: Duration,
    handshake_timeout: Duration,
}

impl Default for RustlsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl RustlsProbe {
    /// Builds a probe trusting the Mozilla root set bundled in `webpki-roots`.
    pub fn new() -> Self {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Self {
            connector: TlsConnector::from(Arc::new(config)),
            connect_timeout: Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            handshake_timeout: Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        }
    }
}

#[async_trait]
impl CertificateProbe for RustlsProbe {
    async fn peer_certificate(&self, host: &str) -> Result<Option<PeerCertificate>, CertificateError> {
        debug!("Attempting to get SSL info for host: {host}");

        let server_name = ServerName::try_from(host.to_string()).map_err(|e| {
            CertificateError::InvalidServerName {
                host: host.to_string(),
                reason: e.to_string(),
            }
        })?;

        let sock = match tokio::time::timeout(
            self.connect_timeout,
            TcpStream::connect((host, HTTPS_PORT)),
        )
        .await
        {
            Ok(Ok(sock)) => sock,
            Ok(Err(e)) => {
                error!("Failed to connect to {host}:{HTTPS_PORT} - {e}");
                return Err(CertificateError::Connect {
                    host: host.to_string(),
                    port: HTTPS_PORT,
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                error!("TCP connection timeout for {host}:{HTTPS_PORT}");
                return Err(CertificateError::Connect {
                    host: host.to_string(),
                    port: HTTPS_PORT,
                    reason: format!("timed out after {}s", self.connect_timeout.as_secs()),
                });
            }
        };

        let tls_stream = match tokio::time::timeout(
            self.handshake_timeout,
            self.connector.connect(server_name, sock),
        )
        .await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                error!("TLS connection failed for {host}: {e}");
                return Err(CertificateError::Handshake {
                    host: host.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                error!("TLS handshake timeout for {host}");
                return Err(CertificateError::Handshake {
                    host: host.to_string(),
                    reason: format!("timed out after {}s", self.handshake_timeout.as_secs()),
                });
            }
        };

        let Some(leaf) = tls_stream
            .get_ref()
            .1
            .peer_certificates()
            .and_then(|certs| certs.first())
        else {
            info!("TLS handshake with {host} completed without a peer certificate");
            return Ok(None);
        };

        let cert = extract::parse_peer_certificate(leaf.as_ref()).map_err(|source| {
            CertificateError::Decode {
                host: host.to_string(),
                source,
            }
        })?;

        info!("SSL certificate info extracted for host: {host}");
        Ok(Some(cert))
    }
}

/// Runs the HTTPS check for an already normalized URL.
///
/// Non-https URLs are answered immediately without touching the network.
pub async fn check_https(
    probe: &dyn CertificateProbe,
    url: &Url,
) -> Result<CertificateReport, CertificateError> {
    if url.scheme() != "https" {
        debug!("{url} is not https, skipping certificate probe");
        return Ok(CertificateReport::not_https());
    }

    let host = url
        .host_str()
        .ok_or_else(|| CertificateError::InvalidServerName {
            host: url.to_string(),
            reason: "URL has no host".to_string(),
        })?
        .trim_start_matches('[')
        .trim_end_matches(']');

    match probe.peer_certificate(host).await? {
        Some(cert) => Ok(CertificateReport::from_certificate(&cert, Utc::now())),
        None => Ok(CertificateReport::no_certificate()),
    }
}
