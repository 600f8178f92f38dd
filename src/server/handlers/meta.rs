//! Meta tag analysis handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::info;
use scraper::Html;

use super::super::types::{required, AppState, MetaAnalysisResponse, UrlRequest};
use crate::app::validate_and_normalize_url;
use crate::error_handling::AuditError;
use crate::parse::extract_meta_tags;

const INVALID_URL: &str = "Invalid or missing URL";

/// `POST /api/metataganalysis`
pub async fn meta_tag_analysis_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<MetaAnalysisResponse>, AuditError> {
    let Json(request) = payload?;
    let url = required(request.url).ok_or(AuditError::MissingField(INVALID_URL))?;
    let target = validate_and_normalize_url(&url).ok_or(AuditError::InvalidUrl(INVALID_URL))?;

    info!("Analyzing meta tags for {target}");
    let html = state
        .fetcher
        .fetch_html(target.as_str())
        .await
        .map_err(|e| AuditError::upstream("Failed to analyze meta tags", e))?;

    let meta = extract_meta_tags(&Html::parse_document(&html));
    Ok(Json(MetaAnalysisResponse {
        success: true,
        meta,
    }))
}
