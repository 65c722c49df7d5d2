//! Error handling for the API gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error information
    pub error: ErrorInfo,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Detailed error information
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code (string identifier for the error type)
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] common::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        // Log the error with request ID for backend tracing
        tracing::error!("API Error [{}]: {:?}", request_id, &self);

        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Ledger(e) => match e {
                // Client errors (4xx)
                common::error::Error::CustomerNotFound(_) => {
                    (StatusCode::NOT_FOUND, "customer_not_found")
                }
                common::error::Error::AlreadyRegistered(_) => {
                    (StatusCode::BAD_REQUEST, "already_registered")
                }
                common::error::Error::InvalidFieldType(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_field_type")
                }
                common::error::Error::MissingField(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "missing_field")
                }
                common::error::Error::InvalidValue(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_value")
                }
                common::error::Error::InsufficientFunds(_) => {
                    (StatusCode::BAD_REQUEST, "insufficient_funds")
                }
                common::error::Error::NoChangesRequested(_) => {
                    (StatusCode::BAD_REQUEST, "no_changes_requested")
                }
                common::error::Error::EmptyLedger(_) => (StatusCode::NOT_FOUND, "empty_ledger"),

                // Server errors (5xx)
                common::error::Error::Internal(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
                }
                common::error::Error::Serialization(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error")
                }
                common::error::Error::DecimalError(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "decimal_error")
                }
            },
        };

        // Create the error response
        let error_response = ErrorResponse {
            error: ErrorInfo {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id: Some(request_id),
        };

        // Return the response with appropriate status code
        (status, Json(error_response)).into_response()
    }
}
