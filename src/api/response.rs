//! Response types for the payroll engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::LeaveAccrual;
use crate::error::EngineError;
use crate::models::PayComponent;

/// Response body for the `/interpret` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretResponse {
    /// The interpreted pay components.
    pub components: Vec<PayComponent>,
    /// Sum of all component amounts.
    pub gross_amount: Decimal,
    /// The superannuation guarantee percentage resolved for the record date.
    pub superannuation_rate: Decimal,
    /// The superannuation contribution on the gross amount.
    pub superannuation: Decimal,
    /// Leave accrued for the worked hours.
    pub leave_accruals: Vec<LeaveAccrual>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmptyPayRun { run_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPTY_PAY_RUN",
                    format!("Pay run '{}' contains no payslips", run_id),
                    "A pay event requires at least one payslip",
                ),
            },
            EngineError::EventNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EVENT_NOT_FOUND", format!("Pay event not found: {}", id)),
            },
            EngineError::EventAlreadySubmitted { id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new(
                    "EVENT_ALREADY_SUBMITTED",
                    format!("Pay event '{}' has already been submitted", id),
                ),
            },
            EngineError::InvalidStatusTransition { from, to } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new(
                    "INVALID_STATUS_TRANSITION",
                    format!("Invalid status transition from {} to {}", from, to),
                ),
            },
        }
    }
}
