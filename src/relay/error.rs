//! Relay error taxonomy.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use super::provider::{Provider, UnknownProvider};

/// Errors surfaced by the relay endpoint.
///
/// Every variant is caught at the HTTP boundary and converted into a
/// `{"error": ...}` body; none propagates as an unhandled fault.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Provider identifier not present in the registry.
    #[error("invalid provider: {0}")]
    InvalidProvider(String),

    /// One of the two required credentials was empty or absent.
    #[error("API keys not provided")]
    MissingCredentials,

    /// Upstream answered with a non-success status. Status and body are
    /// relayed untranslated so callers can diagnose provider-specific
    /// failures.
    #[error("{provider} API error (status {status}): {body}")]
    Upstream {
        provider: Provider,
        status: u16,
        body: String,
    },

    /// Network failure, or a success response with an undecodable body.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<UnknownProvider> for RelayError {
    fn from(err: UnknownProvider) -> Self {
        RelayError::InvalidProvider(err.0)
    }
}

impl RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidProvider(_) | RelayError::MissingCredentials => {
                StatusCode::BAD_REQUEST
            }
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err = RelayError::InvalidProvider("mistral".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid provider: mistral");

        let err = RelayError::MissingCredentials;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "API keys not provided");
    }

    #[test]
    fn test_upstream_error_relays_status() {
        let err = RelayError::Upstream {
            provider: Provider::Groq,
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "groq API error (status 429): rate limited");
    }

    #[test]
    fn test_upstream_error_with_invalid_status_falls_back() {
        let err = RelayError::Upstream {
            provider: Provider::OpenAi,
            status: 1000,
            body: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unknown_provider_conversion() {
        let err: RelayError = UnknownProvider("cohere".to_string()).into();
        assert!(matches!(err, RelayError::InvalidProvider(ref s) if s == "cohere"));
    }
}
