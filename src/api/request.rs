//! Request types for the Leave Entitlement Engine API.
//!
//! Dates are ISO `YYYY-MM-DD`; a malformed date fails JSON extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::MaternityFinalization;
use crate::models::{Gender, LeaveRequestInput, MaternityDetails};

/// Request body for `/leave/compute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveComputeRequest {
    /// The leave request as currently filled in.
    pub leave: LeaveRequestInput,
}

/// The employee applying for leave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's gender, used for leave type eligibility.
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Request body for `/leave/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSubmissionRequest {
    /// The applicant.
    pub applicant: ApplicantRequest,
    /// The id of the request being edited; a new id is issued when absent.
    #[serde(default)]
    pub leave_id: Option<Uuid>,
    /// The leave request.
    pub leave: LeaveRequestInput,
    /// The day the request is made; today's local date when absent.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Request body for `/leave/maternity/finalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaternityFinalizationRequest {
    /// Start date of the approved leave.
    pub date_from: NaiveDate,
    /// The maternity details on record.
    pub details: MaternityDetails,
    /// The details confirmed by HR.
    pub update: MaternityFinalization,
}
