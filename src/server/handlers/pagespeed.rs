//! PageSpeed relay handler.

use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;

use super::super::types::{required, AppState, PageSpeedRequest};
use crate::app::validate_and_normalize_url;
use crate::error_handling::AuditError;
use crate::pagespeed::Strategy;

/// `POST /api/seo-audit`
///
/// Errors on this endpoint use a `message` key rather than `error`.
pub async fn seo_audit_handler(
    State(state): State<AppState>,
    payload: Result<Json<PageSpeedRequest>, JsonRejection>,
) -> Response {
    match run(&state, payload).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => e.into_response_with_key("message"),
    }
}

async fn run(
    state: &AppState,
    payload: Result<Json<PageSpeedRequest>, JsonRejection>,
) -> Result<serde_json::Value, AuditError> {
    let Json(request) = payload?;
    let url = required(request.url).ok_or(AuditError::MissingField("URL is required"))?;

    let strategy = match required(request.strategy) {
        Some(raw) => Some(Strategy::from_str(&raw).map_err(|_| {
            AuditError::InvalidInput(format!(
                "Unsupported strategy '{raw}', expected 'mobile' or 'desktop'"
            ))
        })?),
        None => None,
    };

    let target =
        validate_and_normalize_url(&url).ok_or(AuditError::InvalidUrl("Invalid URL format"))?;

    info!("PageSpeed audit requested for {target}");
    state
        .pagespeed
        .run(target.as_str(), strategy)
        .await
        .map_err(|e| AuditError::upstream("Error fetching PageSpeed Insights data", e))
}
