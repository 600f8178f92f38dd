//! Certificate extraction utilities.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use x509_parser::extensions::{GeneralName, ParsedExtension};

use super::PeerCertificate;

/// Decodes a DER certificate into the fields the HTTPS check reports.
pub(crate) fn parse_peer_certificate(der: &[u8]) -> Result<PeerCertificate> {
    let (_, cert) =
        x509_parser::parse_x509_certificate(der).context("Failed to parse peer certificate")?;
    let validity = cert.validity();

    Ok(PeerCertificate {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        not_before: asn1_to_utc(validity.not_before.timestamp(), "not_before")?,
        not_after: asn1_to_utc(validity.not_after.timestamp(), "not_after")?,
        subject_alt_names: extract_certificate_sans(&cert),
    })
}

fn asn1_to_utc(timestamp: i64, field: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| anyhow::anyhow!("Certificate {} out of range: {}", field, timestamp))
}

/// Extracts DNS names from the Subject Alternative Name extension.
///
/// IP addresses, e-mail addresses and other name types are skipped.
pub(crate) fn extract_certificate_sans(
    cert: &x509_parser::certificate::X509Certificate<'_>,
) -> Vec<String> {
    let mut sans = Vec::new();

    for ext in cert.extensions() {
        if let ParsedExtension::SubjectAlternativeName(ref san) = ext.parsed_extension() {
            for general_name in &san.general_names {
                if let GeneralName::DNSName(dns_name) = general_name {
                    sans.push(dns_name.to_string());
                }
            }
        }
    }

    sans
}
