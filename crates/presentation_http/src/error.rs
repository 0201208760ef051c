//! API error handling
//!
//! Maps the error taxonomy onto HTTP statuses and a structured JSON
//! envelope. Upstream messages are passed through where safe so the user can
//! decide whether a retry makes sense.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or unsafe input; corrected by the user
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Wrong password; the user may retry immediately
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Required secret or credential missing; needs operator action
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Draft generator or sender call failed; manual retry possible
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Configuration(_) | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Authentication(_) => "authentication_error",
            Self::Configuration(_) => "configuration_error",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = (self.status(), self.code());
        let message = match &self {
            ApiError::Validation(msg)
            | ApiError::Authentication(msg)
            | ApiError::Configuration(msg)
            | ApiError::Upstream(msg)
            | ApiError::Internal(msg) => msg.clone(),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::Validation(e.to_string()),
            ApplicationError::Configuration(msg) => Self::Configuration(msg),
            ApplicationError::Upstream(msg) => Self::Upstream(msg),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
