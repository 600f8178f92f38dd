//! HTTPS check report shapes and expiry arithmetic.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PeerCertificate;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Same layout OpenSSL uses for `notBefore`/`notAfter`, e.g. `Mar 13 00:00:00 2025 GMT`.
const CERT_DATE_FORMAT: &str = "%b %e %H:%M:%S %Y GMT";

/// Result of the HTTPS check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateReport {
    #[serde(rename = "isHTTPS")]
    pub is_https: bool,
    pub secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateDetails>,
    pub message: String,
}

/// Certificate fields returned when a certificate was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetails {
    pub subject: String,
    pub issuer: String,
    pub valid_from: String,
    pub valid_to: String,
    pub days_left: i64,
    pub subject_alt_names: Vec<String>,
}

impl CertificateReport {
    /// Site was not requested over HTTPS; nothing was contacted.
    pub fn not_https() -> Self {
        Self {
            is_https: false,
            secure: false,
            certificate: None,
            message: "The site does not use HTTPS.".to_string(),
        }
    }

    /// TLS connection succeeded but the server presented no certificate.
    pub fn no_certificate() -> Self {
        Self {
            is_https: true,
            secure: false,
            certificate: None,
            message: "No certificate information found.".to_string(),
        }
    }

    /// Builds the report for a certificate as seen at `now`.
    pub fn from_certificate(cert: &PeerCertificate, now: DateTime<Utc>) -> Self {
        let days_left = days_left(cert.not_after, now);
        let message = if days_left > 0 {
            format!("Valid SSL certificate. Expires in {days_left} day(s).")
        } else {
            "SSL certificate has expired.".to_string()
        };

        Self {
            is_https: true,
            secure: true,
            certificate: Some(CertificateDetails {
                subject: cert.subject.clone(),
                issuer: cert.issuer.clone(),
                valid_from: cert.not_before.format(CERT_DATE_FORMAT).to_string(),
                valid_to: cert.not_after.format(CERT_DATE_FORMAT).to_string(),
                days_left,
                subject_alt_names: cert.subject_alt_names.clone(),
            }),
            message,
        }
    }
}

/// Whole days until `not_after`, rounded down (negative once expired).
pub fn days_left(not_after: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (not_after - now).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}
