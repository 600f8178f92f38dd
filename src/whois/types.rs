//! WHOIS data structures.

use serde::Serialize;

/// Placeholder for summary fields the registry did not return.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Registration fields the WHOIS endpoint reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Domain name as echoed by the registry
    pub domain_name: Option<String>,
    /// Registrant organization
    pub registrant_organization: Option<String>,
    /// Registrar name
    pub registrar: Option<String>,
}

/// Fixed-field projection returned by the WHOIS endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisSummary {
    pub domain_name: Option<String>,
    pub owner: String,
    pub registrar: String,
}

impl From<&WhoisRecord> for WhoisSummary {
    fn from(record: &WhoisRecord) -> Self {
        WhoisSummary {
            domain_name: record.domain_name.clone(),
            owner: record
                .registrant_organization
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            registrar: record
                .registrar
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}
