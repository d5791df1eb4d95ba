//! HTTP API module for the Leave Entitlement Engine.
//!
//! This module provides the REST API endpoints for computing leave days,
//! submitting leave requests, and finalizing maternity leave.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ApplicantRequest, LeaveComputeRequest, LeaveSubmissionRequest, MaternityFinalizationRequest,
};
pub use response::{ApiError, ApiErrorResponse, LeaveComputeResponse, ValidationFailure};
pub use state::AppState;
