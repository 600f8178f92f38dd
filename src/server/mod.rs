//! HTTP API server.
//!
//! Six `POST` audit endpoints under `/api`, plus `GET /health`:
//! - `/api/seo-audit` - PageSpeed Insights relay
//! - `/api/whois` - registration summary
//! - `/api/metataganalysis` - document meta tags
//! - `/api/headingstructure` - h1-h6 outline and level jumps
//! - `/api/httpscheck` - TLS certificate report
//! - `/api/backlinkanalysis` - first rows of a backlink report
//!
//! Cross-origin requests are allowed from anywhere.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::app::shutdown_signal;
use crate::config::Config;

use handlers::{
    backlink_analysis_handler, health_handler, heading_structure_handler, https_check_handler,
    meta_tag_analysis_handler, seo_audit_handler, whois_handler,
};
pub use types::{
    AppState, BacklinkResponse, HealthResponse, HeadingStructureResponse, MetaAnalysisResponse,
    PageSpeedRequest, SiteUrlRequest, UrlRequest,
};

/// Builds the application router around `state`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/seo-audit", post(seo_audit_handler))
        .route("/whois", post(whois_handler))
        .route("/metataganalysis", post(meta_tag_analysis_handler))
        .route("/headingstructure", post(heading_structure_handler))
        .route("/httpscheck", post(https_check_handler))
        .route("/backlinkanalysis", post(backlink_analysis_handler));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until a shutdown signal arrives.
pub async fn start_server(config: &Config, state: AppState) -> Result<(), anyhow::Error> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Server running on http://{}", addr);
    log::info!("  - API: http://{}/api", addr);
    log::info!("  - Health: http://{}/health", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}
