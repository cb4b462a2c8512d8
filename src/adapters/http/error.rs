//! Shared HTTP error response and DomainError mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error response body shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
        }
    }
}

/// Maps a DomainError to an HTTP response.
///
/// The body carries the error code's wire form plus the domain message, so
/// step-prefixed cascade failures surface verbatim to the admin UI.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::ProfileNotFound | ErrorCode::EntryNotFound | ErrorCode::UserNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::ProfileExists => StatusCode::CONFLICT,
        ErrorCode::AuthDirectoryError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(code = %error.code(), "request failed: {}", error.message());
    }

    let body = ErrorResponse {
        code: error.code().to_string(),
        message: error.message().to_string(),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_403() {
        let error = DomainError::new(ErrorCode::Forbidden, "Admin role required");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn validation_maps_to_400() {
        let error = DomainError::validation("email", "valid email required");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn user_not_found_maps_to_404() {
        let error = DomainError::new(ErrorCode::UserNotFound, "No profile for user");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn directory_failure_maps_to_502() {
        let error = DomainError::new(ErrorCode::AuthDirectoryError, "directory returned 500");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn database_failure_maps_to_500() {
        let error = DomainError::database("connection reset");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
