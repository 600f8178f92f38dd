//! Backlink analysis handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::info;

use super::super::types::{required, AppState, BacklinkResponse, SiteUrlRequest};
use crate::app::{target_host, validate_and_normalize_url};
use crate::backlinks::ScrapeError;
use crate::error_handling::AuditError;

/// `POST /api/backlinkanalysis`
pub async fn backlink_analysis_handler(
    State(state): State<AppState>,
    payload: Result<Json<SiteUrlRequest>, JsonRejection>,
) -> Result<Json<BacklinkResponse>, AuditError> {
    let Json(request) = payload?;
    let site_url =
        required(request.site_url).ok_or(AuditError::MissingField("Domain is required"))?;
    let domain = validate_and_normalize_url(&site_url)
        .as_ref()
        .and_then(target_host)
        .ok_or(AuditError::InvalidUrl("Invalid domain"))?;

    info!("Backlink analysis requested for {domain}");
    let backlinks = state.backlinks.scrape(&domain).await.map_err(|e| match e {
        ScrapeError::TableNotFound(_) => AuditError::upstream(
            "Backlink table not found. It may not have loaded or the selector is incorrect.",
            e,
        ),
        other => AuditError::upstream("Failed to scrape backlinks", other),
    })?;

    Ok(Json(BacklinkResponse { domain, backlinks }))
}
