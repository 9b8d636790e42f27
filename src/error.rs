//! Central error type with HTTP status code mapping.
//!
//! [`KioskError`] is the single error enum for the server. Every variant
//! maps to an HTTP status and to the `{ok: false, error}` JSON envelope
//! that all endpoints use for failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Failure envelope returned by every endpoint.
///
/// ```json
/// { "ok": false, "error": "invalid room id: 0" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false` in an error response.
    pub ok: bool,
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    /// Request validation failed before touching storage.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The room id segment was not a positive integer.
    #[error("invalid room id: {0}")]
    InvalidRoomId(String),

    /// The supplied admin PIN did not match.
    #[error("invalid pin")]
    InvalidPin,

    /// A valid admin session is required for this endpoint.
    #[error("admin session required")]
    Unauthorized,

    /// A catalog record with the given id was not found.
    #[error("{kind} not found: {id}")]
    CatalogNotFound {
        /// Catalog kind (`"doctor"`, `"assistant"`, `"patient"`).
        kind: &'static str,
        /// The id that was looked up.
        id: uuid::Uuid,
    },

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl KioskError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidRoomId(_) => StatusCode::BAD_REQUEST,
            Self::InvalidPin | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::CatalogNotFound { .. } => StatusCode::NOT_FOUND,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for KioskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            ok: false,
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_request() {
        let err = KioskError::InvalidRequest("doctorName is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = KioskError::InvalidRoomId("abc".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_errors_are_unauthorized() {
        assert_eq!(KioskError::InvalidPin.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            KioskError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn store_errors_are_internal() {
        let err = KioskError::PersistenceError("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_serializes_with_ok_false() {
        let body = ErrorResponse {
            ok: false,
            error: "invalid pin".to_string(),
        };
        let json = serde_json::to_string(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.contains("\"ok\":false"));
        assert!(json.contains("invalid pin"));
    }
}
