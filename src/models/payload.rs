//! Submission payload models.
//!
//! A [`LeavePayload`] is what the form host forwards to the leave backend once
//! validation passes. It is also the shape of an existing request when one is
//! opened for editing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{LeaveType, MaternityType};

/// Maternity-specific details carried with a maternity leave payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaternityDetails {
    /// Kind of maternity application.
    #[serde(rename = "type")]
    pub maternity_type: MaternityType,
    /// True only when the solo-parent bonus was actually claimable.
    pub is_solo_parent: bool,
    /// Expected (prenatal) or actual delivery/event date.
    pub delivery_date: NaiveDate,
    /// Confirmed actual delivery date, recorded at finalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<NaiveDate>,
    /// Days allocated to the alternate caregiver (0 when not allocating).
    pub allocation_days: u32,
    /// Name of the medical certificate, if any.
    pub medical_document_name: Option<String>,
    /// Name of the solo-parent ID, if any.
    pub solo_parent_document_name: Option<String>,
}

/// Paternity-specific details carried with a paternity leave payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaternityDetails {
    /// Child's date of birth or the miscarriage date.
    pub childs_dob: NaiveDate,
    /// Eligibility self-certification.
    pub is_eligible_paternity: bool,
    /// Name of the marriage certificate, if any.
    pub marriage_cert_name: Option<String>,
    /// Name of the birth or medical certificate, if any.
    pub birth_cert_name: Option<String>,
}

/// A validated leave request ready for the leave backend.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeavePayload, LeaveType};
/// use chrono::NaiveDate;
///
/// let payload = LeavePayload {
///     leave_id: None,
///     leave_type: LeaveType::Vacation,
///     date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     date_to: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     reason: "Family trip".to_string(),
///     days: 10,
///     maternity_details: None,
///     paternity_details: None,
/// };
///
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["leave_type"], "vacation");
/// assert!(json.get("maternity_details").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePayload {
    /// Identifier of the request being edited, absent for new requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_id: Option<Uuid>,
    /// The leave type.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub date_from: NaiveDate,
    /// Last day of leave (inclusive).
    pub date_to: NaiveDate,
    /// Free-text reason.
    pub reason: String,
    /// Total days of leave.
    pub days: u32,
    /// Present for maternity leave only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maternity_details: Option<MaternityDetails>,
    /// Present for paternity leave only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paternity_details: Option<PaternityDetails>,
}
