//! WHOIS handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::{debug, info};

use super::super::types::{required, AppState, UrlRequest};
use crate::app::{target_host, validate_and_normalize_url};
use crate::domain::registrable_domain;
use crate::error_handling::AuditError;
use crate::whois::WhoisSummary;

const DOMAIN_REQUIRED: &str = "Domain is required.";

/// `POST /api/whois`
pub async fn whois_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<WhoisSummary>, AuditError> {
    let Json(request) = payload?;
    let input = required(request.url).ok_or(AuditError::MissingField(DOMAIN_REQUIRED))?;

    let host = validate_and_normalize_url(&input)
        .as_ref()
        .and_then(target_host)
        .ok_or(AuditError::InvalidUrl("Invalid domain."))?;

    // Registries only answer for the registrable part (shop.example.co.uk -> example.co.uk)
    let domain = match registrable_domain(&host) {
        Ok(domain) => domain,
        Err(e) => {
            debug!("Querying WHOIS with full host {host}: {e}");
            host
        }
    };

    info!("WHOIS lookup requested for {domain}");
    let record = state
        .whois
        .lookup(&domain)
        .await
        .map_err(|e| AuditError::upstream("WHOIS lookup failed.", e))?;

    let summary = WhoisSummary::from(&record);
    debug!("WHOIS summary for {domain}: {summary:?}");
    Ok(Json(summary))
}
