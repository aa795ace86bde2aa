//! # API Errors
//!
//! Every handler failure becomes an `ApiError`, which renders itself as a
//! JSON response. Internal failures never leak their cause to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{ValidationErrors, ValidationIssue};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Submitted body failed shape validation (400)
    #[error("{message}: {errors}")]
    Validation {
        message: &'static str,
        errors: ValidationErrors,
    },

    /// Anything else (500). Carries only the client-facing message.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn validation(message: &'static str, errors: ValidationErrors) -> Self {
        ApiError::Validation { message, errors }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationIssue>>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation { message, errors } => Self {
                error: message.to_string(),
                details: Some(errors.into_issues()),
            },
            ApiError::Internal(message) => Self {
                error: message.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::validation(
            "Invalid contact data",
            ValidationErrors::single(ValidationIssue::missing_field("email")),
        );
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("Failed to fetch courses").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body_has_details() {
        let err = ApiError::validation(
            "Invalid enrollment data",
            ValidationErrors::single(ValidationIssue::missing_field("phone")),
        );
        let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();

        assert_eq!(json["error"], "Invalid enrollment data");
        assert_eq!(json["details"][0]["path"][0], "phone");
    }

    #[test]
    fn test_internal_body_is_generic() {
        let json =
            serde_json::to_value(ErrorResponse::from(ApiError::Internal("Failed to fetch contacts")))
                .unwrap();
        assert_eq!(json, serde_json::json!({"error": "Failed to fetch contacts"}));
    }
}
