//! Heading structure handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::info;
use scraper::Html;

use super::super::types::{required, AppState, HeadingStructureResponse, UrlRequest};
use crate::app::validate_and_normalize_url;
use crate::error_handling::AuditError;
use crate::parse::analyze_headings;

const INVALID_URL: &str = "Invalid or missing URL";

/// `POST /api/headingstructure`
///
/// Unlike the other endpoints this one only accepts full `http(s)://` URLs.
pub async fn heading_structure_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<HeadingStructureResponse>, AuditError> {
    let Json(request) = payload?;
    let url = required(request.url).ok_or(AuditError::MissingField(INVALID_URL))?;
    if !url.starts_with("http") {
        return Err(AuditError::InvalidUrl(INVALID_URL));
    }
    let target = validate_and_normalize_url(&url).ok_or(AuditError::InvalidUrl(INVALID_URL))?;

    info!("Analyzing heading structure for {target}");
    let html = state
        .fetcher
        .fetch_html(target.as_str())
        .await
        .map_err(|e| AuditError::upstream("Failed to analyze heading tags", e))?;

    let report = analyze_headings(&Html::parse_document(&html));
    Ok(Json(HeadingStructureResponse {
        success: true,
        report,
    }))
}
