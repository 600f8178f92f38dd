//! HTTPS certificate check handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::info;

use super::super::types::{required, AppState, SiteUrlRequest};
use crate::app::validate_and_normalize_url;
use crate::error_handling::AuditError;
use crate::tls::{check_https, CertificateReport};

/// `POST /api/httpscheck`
pub async fn https_check_handler(
    State(state): State<AppState>,
    payload: Result<Json<SiteUrlRequest>, JsonRejection>,
) -> Result<Json<CertificateReport>, AuditError> {
    let Json(request) = payload?;
    let site_url = required(request.site_url).ok_or(AuditError::MissingField("URL is required"))?;
    let target =
        validate_and_normalize_url(&site_url).ok_or(AuditError::InvalidUrl("Invalid URL format"))?;

    info!("Checking HTTPS for {target}");
    let report = check_https(state.certificates.as_ref(), &target)
        .await
        .map_err(|e| AuditError::upstream("Unable to verify HTTPS connection.", e))?;

    Ok(Json(report))
}
