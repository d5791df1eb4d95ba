//! HTTP request handlers for the Leave Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ValidationContext, calculate_entitlement, finalize_maternity, prepare_submission,
};
use crate::error::EngineResult;
use crate::models::{LeaveField, LeaveType, ValidationErrors};

use super::request::{LeaveComputeRequest, LeaveSubmissionRequest, MaternityFinalizationRequest};
use super::response::{ApiError, ApiErrorResponse, LeaveComputeResponse, ValidationFailure};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/compute", post(compute_handler))
        .route("/leave/submit", post(submit_handler))
        .route("/leave/maternity/finalize", post(finalize_maternity_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Builds the notice and credit context for a submission made on `today`.
fn validation_context(
    state: &AppState,
    employee_id: &str,
    leave_type: Option<LeaveType>,
    today: NaiveDate,
) -> EngineResult<ValidationContext> {
    let mut context = ValidationContext::new(today);
    if let Some(leave_type) = leave_type {
        context = context.with_notice_days(state.config().notice_days(leave_type)?);
        if let Some(balance) = state.credit_balance(employee_id, leave_type, today)? {
            context = context.with_credit_balance(balance);
        }
    }
    Ok(context)
}

/// Handler for POST /leave/compute.
///
/// Returns the day count and end date for a partially or fully filled request.
async fn compute_handler(payload: Result<Json<LeaveComputeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let result = calculate_entitlement(&request.leave);

    info!(
        correlation_id = %correlation_id,
        leave_type = request.leave.leave_type.map(|t| t.code()).unwrap_or("none"),
        days = result.computation.days,
        duration_us = start_time.elapsed().as_micros(),
        "Leave computed"
    );

    (StatusCode::OK, Json(LeaveComputeResponse::from(result))).into_response()
}

/// Handler for POST /leave/submit.
///
/// Checks the leave type is offered to the applicant, validates the request
/// against the notice policy and the applicant's credits, and returns the
/// payload to persist.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSubmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Some(leave_type) = request.leave.leave_type {
        match state
            .config()
            .is_available_to(leave_type, request.applicant.gender)
        {
            Ok(true) => {}
            Ok(false) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %request.applicant.id,
                    leave_type = leave_type.code(),
                    "Leave type not available to applicant"
                );
                let mut errors = ValidationErrors::new();
                errors.insert(
                    LeaveField::LeaveType,
                    format!("{} is not available to this applicant.", leave_type.label()),
                );
                return ValidationFailure::new(errors).into_response();
            }
            Err(err) => return ApiErrorResponse::from(err).into_response(),
        }
    }

    let start_time = Instant::now();
    let today = request
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let context = match validation_context(
        &state,
        &request.applicant.id,
        request.leave.leave_type,
        today,
    ) {
        Ok(context) => context,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let computed = calculate_entitlement(&request.leave).computation;
    let leave_id = request.leave_id.unwrap_or_else(Uuid::new_v4);

    match prepare_submission(&request.leave, &computed, Some(leave_id), &context) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.applicant.id,
                leave_id = %leave_id,
                leave_type = leave.leave_type.code(),
                days = leave.days,
                duration_us = start_time.elapsed().as_micros(),
                "Leave submission accepted"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(leave),
            )
                .into_response()
        }
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.applicant.id,
                fields = ?errors.fields(),
                "Leave submission failed validation"
            );
            ValidationFailure::new(errors).into_response()
        }
    }
}

/// Handler for POST /leave/maternity/finalize.
async fn finalize_maternity_handler(
    payload: Result<Json<MaternityFinalizationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = finalize_maternity(request.date_from, &request.details, &request.update);

    info!(
        correlation_id = %correlation_id,
        maternity_type = ?result.details.maternity_type,
        days = result.days,
        "Maternity leave finalized"
    );

    (StatusCode::OK, Json(result)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::FinalizedMaternity;
    use crate::config::ConfigLoader;
    use crate::models::LeavePayload;
    use axum::{body::Body, http::Request};
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/leave_policy").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: impl Into<String>) -> (StatusCode, serde_json::Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.into()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_compute_vacation_days() {
        let body = r#"{ "leave": { "leave_type": "vacation", "date_from": "2024-01-01", "date_to": "2024-01-10" } }"#;
        let (status, json) = post_json("/leave/compute", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["days"], 10);
        assert_eq!(json["date_to"], "2024-01-10");
        assert!(json.get("original_days").is_none());
    }

    #[tokio::test]
    async fn test_compute_maternity_reports_original_days() {
        let body = r#"{ "leave": {
            "leave_type": "maternity", "maternity_type": "normal",
            "date_from": "2024-01-01", "will_allocate": true, "allocation_days": 7
        } }"#;
        let (status, json) = post_json("/leave/compute", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["days"], 98);
        assert_eq!(json["original_days"], 105);
        assert_eq!(json["date_to"], "2024-04-07");
    }

    #[tokio::test]
    async fn test_submit_assigns_new_leave_id() {
        let body = r#"{
            "applicant": { "id": "emp_001", "gender": "female" },
            "reference_date": "2024-03-01",
            "leave": { "leave_type": "sick", "date_from": "2024-03-04", "date_to": "2024-03-05", "reason": "Flu" }
        }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::CREATED);
        let payload: LeavePayload = serde_json::from_value(json).unwrap();
        assert!(payload.leave_id.is_some());
        assert_eq!(payload.days, 2);
    }

    #[tokio::test]
    async fn test_submit_keeps_edited_leave_id() {
        let leave_id = Uuid::new_v4();
        let body = format!(
            r#"{{
                "applicant": {{ "id": "emp_001" }},
                "reference_date": "2024-02-01",
                "leave_id": "{}",
                "leave": {{ "leave_type": "unpaid", "date_from": "2024-03-04", "date_to": "2024-03-04", "reason": "Errand" }}
            }}"#,
            leave_id
        );
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["leave_id"], leave_id.to_string());
    }

    #[tokio::test]
    async fn test_submit_invalid_returns_422() {
        let body = r#"{
            "applicant": { "id": "emp_001" },
            "reference_date": "2024-02-01",
            "leave": { "leave_type": "vacation", "date_from": "2024-03-05", "date_to": "2024-03-04" }
        }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["errors"]["date_to"], "End date cannot be before start date.");
        assert_eq!(json["errors"]["reason"], "A reason for the leave is required.");
    }

    #[tokio::test]
    async fn test_submit_maternity_for_male_applicant_rejected() {
        let body = r#"{
            "applicant": { "id": "emp_002", "gender": "male" },
            "leave": { "leave_type": "maternity", "maternity_type": "normal",
                       "date_from": "2024-01-01", "delivery_date": "2024-01-01", "reason": "Delivery" }
        }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json["errors"]["leave_type"],
            "Maternity Leave is not available to this applicant."
        );
    }

    #[tokio::test]
    async fn test_submit_beyond_vacation_credits_returns_422() {
        let body = r#"{
            "applicant": { "id": "emp_010" },
            "reference_date": "2025-01-06",
            "leave": { "leave_type": "vacation", "date_from": "2025-02-01", "date_to": "2025-04-01",
                       "reason": "Long trip" }
        }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json["errors"]["days"],
            "Insufficient Vacation Leave credits. Remaining: 15, requested: 60."
        );
    }

    #[tokio::test]
    async fn test_submit_inside_notice_window_returns_422() {
        let body = r#"{
            "applicant": { "id": "emp_011" },
            "reference_date": "2025-03-03",
            "leave": { "leave_type": "vacation", "date_from": "2025-03-04", "date_to": "2025-03-04",
                       "reason": "Errand" }
        }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json["errors"]["date_from"],
            "Minimum notice for Vacation Leave: 3 day(s) before start date."
        );
    }

    #[tokio::test]
    async fn test_submit_past_start_returns_422() {
        let body = r#"{
            "applicant": { "id": "emp_012" },
            "reference_date": "2025-03-03",
            "leave": { "leave_type": "sick", "date_from": "2025-03-01", "date_to": "2025-03-02",
                       "reason": "Flu" }
        }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["errors"]["date_from"], "Start date cannot be in the past.");
        assert_eq!(json["errors"]["date_to"], "End date cannot be in the past.");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = post_json("/leave/submit", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_bad_date_returns_400() {
        let body = r#"{ "leave": { "leave_type": "sick", "date_from": "04/03/2024" } }"#;
        let (status, json) = post_json("/leave/compute", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_applicant_returns_400() {
        let body = r#"{ "leave": { "leave_type": "sick" } }"#;
        let (status, json) = post_json("/leave/submit", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_finalize_maternity() {
        let body = r#"{
            "date_from": "2024-01-01",
            "details": { "type": "prenatal", "is_solo_parent": false, "delivery_date": "2024-02-01",
                         "allocation_days": 0, "medical_document_name": "med.pdf",
                         "solo_parent_document_name": null },
            "update": { "maternity_type": "miscarriage", "actual_delivery_date": "2024-01-20",
                        "allocation_days": 5 }
        }"#;
        let (status, json) = post_json("/leave/maternity/finalize", body).await;

        assert_eq!(status, StatusCode::OK);
        let result: FinalizedMaternity = serde_json::from_value(json).unwrap();
        assert_eq!(result.days, 60);
        assert_eq!(result.details.allocation_days, 0);
        assert_eq!(result.date_to, NaiveDate::from_ymd_opt(2024, 2, 29));
    }
}
