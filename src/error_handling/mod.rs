//! Error handling.
//!
//! Errors are split into two tiers:
//! - **Client errors**: missing or malformed input, reported as 400 with a short message
//! - **Upstream errors**: network, parse, TLS or scrape failures, reported as 500 with a
//!   generic message while the cause is logged

mod types;

// Re-export public API
pub use types::{AuditError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(
            AuditError::MissingField("URL is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuditError::InvalidUrl("Invalid URL format").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuditError::InvalidInput("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_errors_are_500_and_hide_cause() {
        let err = AuditError::upstream(
            "WHOIS lookup failed.",
            anyhow::anyhow!("connection refused by whois.example"),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "WHOIS lookup failed.");
        // Display keeps the cause for logs
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_into_response_uses_error_key() {
        let response = AuditError::MissingField("Domain is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Domain is required" }));
    }

    #[tokio::test]
    async fn test_into_response_with_message_key() {
        let response = AuditError::upstream(
            "Error fetching PageSpeed Insights data",
            anyhow::anyhow!("503 from upstream"),
        )
        .into_response_with_key("message");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "message": "Error fetching PageSpeed Insights data" })
        );
    }
}
