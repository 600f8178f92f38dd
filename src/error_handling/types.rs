//! Error type definitions.
//!
//! `AuditError` is what every endpoint returns. Client errors carry a short
//! message that is safe to show the caller; upstream errors carry a fixed public
//! message plus the underlying cause, which is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configuration value was rejected.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// Two-tier error returned by the audit endpoints.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A required body field was absent or empty.
    #[error("{0}")]
    MissingField(&'static str),

    /// The supplied URL could not be parsed or has the wrong shape.
    #[error("{0}")]
    InvalidUrl(&'static str),

    /// The request was malformed in some other way (bad JSON, unknown option).
    #[error("{0}")]
    InvalidInput(String),

    /// An external service, fetch, handshake or scrape failed.
    #[error("{message}: {source:#}")]
    Upstream {
        /// Generic message returned to the caller
        message: &'static str,
        /// Underlying cause, logged server-side only
        source: anyhow::Error,
    },
}

impl AuditError {
    /// Wraps an upstream failure with the message the caller will see.
    pub fn upstream(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        AuditError::Upstream {
            message,
            source: source.into(),
        }
    }

    /// HTTP status for this error: 400 for client errors, 500 for upstream ones.
    pub fn status(&self) -> StatusCode {
        match self {
            AuditError::MissingField(_)
            | AuditError::InvalidUrl(_)
            | AuditError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuditError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AuditError::MissingField(msg) | AuditError::InvalidUrl(msg) => (*msg).to_string(),
            AuditError::InvalidInput(msg) => msg.clone(),
            AuditError::Upstream { message, .. } => (*message).to_string(),
        }
    }

    /// Renders the error as `{ "<key>": message }` with the matching status.
    ///
    /// Most endpoints use `"error"`; the PageSpeed endpoint uses `"message"`.
    pub fn into_response_with_key(self, key: &str) -> Response {
        let status = self.status();
        if let AuditError::Upstream { message, source } = &self {
            log::error!("{}: {:#}", message, source);
        } else {
            log::debug!("Rejected request: {}", self);
        }
        let mut body = serde_json::Map::new();
        body.insert(
            key.to_string(),
            serde_json::Value::String(self.public_message()),
        );
        (status, Json(serde_json::Value::Object(body))).into_response()
    }
}

impl IntoResponse for AuditError {
    fn into_response(self) -> Response {
        self.into_response_with_key("error")
    }
}

impl From<axum::extract::rejection::JsonRejection> for AuditError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AuditError::InvalidInput(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
