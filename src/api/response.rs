//! Response types for the Leave Entitlement Engine API.
//!
//! This module defines the response bodies and error handling for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::EntitlementResult;
use crate::error::EngineError;
use crate::models::{AuditStep, ValidationErrors};

/// Response body for `/leave/compute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveComputeResponse {
    /// Leave days after any maternity allocation.
    pub days: u32,
    /// Derived or echoed end date.
    pub date_to: Option<NaiveDate>,
    /// Maternity entitlement before allocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_days: Option<u32>,
    /// Steps explaining the computation.
    pub audit_steps: Vec<AuditStep>,
}

impl From<EntitlementResult> for LeaveComputeResponse {
    fn from(result: EntitlementResult) -> Self {
        Self {
            days: result.computation.days,
            date_to: result.computation.date_to,
            original_days: result.original_days,
            audit_steps: result.audit_steps,
        }
    }
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

    /// Creates a leave type not found error response.
    pub fn leave_type_not_found(code: &str) -> Self {
        Self::with_details(
            "LEAVE_TYPE_NOT_FOUND",
            format!("Leave type not found: {}", code),
            format!("The leave type '{}' is not in the leave policy", code),
        )
    }
}

/// Body returned when a submitted leave request fails validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Always `VALIDATION_FAILED`.
    pub code: String,
    /// Messages keyed by field.
    pub errors: ValidationErrors,
}

impl ValidationFailure {
    /// Wraps field errors.
    pub fn new(errors: ValidationErrors) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            errors,
        }
    }
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
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
            EngineError::LeaveTypeNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::leave_type_not_found(&code),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
