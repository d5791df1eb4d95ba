//! Leave request input model.
//!
//! This module defines the [`LeaveRequestInput`] struct, the ephemeral set of
//! values a form host holds while an employee fills in a leave request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LeaveType, MaternityType};

/// Names of supporting documents attached to a request.
///
/// Only the names are tracked; file storage belongs to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingDocuments {
    /// Medical certificate for maternity leave.
    #[serde(default)]
    pub medical_document: Option<String>,
    /// Solo parent ID, required for the solo-parent bonus.
    #[serde(default)]
    pub solo_parent_document: Option<String>,
    /// Marriage certificate for paternity leave.
    #[serde(default)]
    pub marriage_cert: Option<String>,
    /// Child's birth or medical certificate for paternity leave.
    #[serde(default)]
    pub birth_cert: Option<String>,
}

impl SupportingDocuments {
    /// Returns a copy where every missing document falls back to `stored`.
    ///
    /// Used when editing: a newly attached file wins over the one already on record.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::SupportingDocuments;
    ///
    /// let attached = SupportingDocuments {
    ///     medical_document: Some("new.pdf".to_string()),
    ///     ..Default::default()
    /// };
    /// let stored = SupportingDocuments {
    ///     medical_document: Some("old.pdf".to_string()),
    ///     solo_parent_document: Some("id.png".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let merged = attached.or(&stored);
    /// assert_eq!(merged.medical_document.as_deref(), Some("new.pdf"));
    /// assert_eq!(merged.solo_parent_document.as_deref(), Some("id.png"));
    /// ```
    pub fn or(&self, stored: &SupportingDocuments) -> SupportingDocuments {
        SupportingDocuments {
            medical_document: self
                .medical_document
                .clone()
                .or_else(|| stored.medical_document.clone()),
            solo_parent_document: self
                .solo_parent_document
                .clone()
                .or_else(|| stored.solo_parent_document.clone()),
            marriage_cert: self
                .marriage_cert
                .clone()
                .or_else(|| stored.marriage_cert.clone()),
            birth_cert: self.birth_cert.clone().or_else(|| stored.birth_cert.clone()),
        }
    }
}

/// The inputs of a leave request as held by the form host.
///
/// Type-specific fields are only meaningful for their leave type: maternity
/// fields for [`LeaveType::Maternity`], `childs_dob` and `is_eligible_paternity`
/// for [`LeaveType::Paternity`].
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveRequestInput, LeaveType};
///
/// let input = LeaveRequestInput::default();
/// assert_eq!(input.leave_type, Some(LeaveType::Vacation));
/// assert!(input.date_from.is_none());
/// assert!(!input.can_claim_solo_parent_bonus());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestInput {
    /// The selected leave type, if any.
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    /// First day of leave (inclusive).
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Last day of leave (inclusive). Derived for policy-bound types.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Free-text reason for the leave.
    #[serde(default)]
    pub reason: String,
    /// Kind of maternity application.
    #[serde(default)]
    pub maternity_type: MaternityType,
    /// Self-declared solo-parent status.
    #[serde(default)]
    pub is_solo_parent: bool,
    /// Whether a qualifying solo-parent document is available.
    #[serde(default)]
    pub has_solo_parent_document: bool,
    /// Expected (prenatal) or actual delivery/event date.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// Whether maternity leave credits are allocated to an alternate caregiver.
    #[serde(default)]
    pub will_allocate: bool,
    /// Number of days allocated to the alternate caregiver.
    #[serde(default)]
    pub allocation_days: u32,
    /// Child's date of birth or the miscarriage date.
    #[serde(default)]
    pub childs_dob: Option<NaiveDate>,
    /// Paternity eligibility self-certification.
    #[serde(default)]
    pub is_eligible_paternity: bool,
    /// Attached supporting documents.
    #[serde(default)]
    pub documents: SupportingDocuments,
}

impl Default for LeaveRequestInput {
    fn default() -> Self {
        Self {
            leave_type: Some(LeaveType::Vacation),
            date_from: None,
            date_to: None,
            reason: String::new(),
            maternity_type: MaternityType::default(),
            is_solo_parent: false,
            has_solo_parent_document: false,
            delivery_date: None,
            will_allocate: false,
            allocation_days: 0,
            childs_dob: None,
            is_eligible_paternity: false,
            documents: SupportingDocuments::default(),
        }
    }
}

impl LeaveRequestInput {
    /// Creates an empty input for the given leave type.
    pub fn for_leave_type(leave_type: LeaveType) -> Self {
        Self {
            leave_type: Some(leave_type),
            ..Self::default()
        }
    }

    /// Returns true when the solo-parent bonus may be counted.
    ///
    /// Both the declaration and the supporting document are required; the
    /// declaration alone never grants the bonus.
    pub fn can_claim_solo_parent_bonus(&self) -> bool {
        self.is_solo_parent && self.holds_solo_parent_document()
    }

    /// Returns true when a solo-parent ID is on record or attached.
    pub fn holds_solo_parent_document(&self) -> bool {
        self.has_solo_parent_document || self.documents.solo_parent_document.is_some()
    }

    /// Days allocated to the alternate caregiver, or zero when not allocating.
    pub fn effective_allocation_days(&self) -> u32 {
        if self.will_allocate { self.allocation_days } else { 0 }
    }

    /// Returns true when the selected leave type is Maternity.
    pub fn is_maternity(&self) -> bool {
        self.leave_type == Some(LeaveType::Maternity)
    }

    /// Returns true when the selected leave type is Paternity.
    pub fn is_paternity(&self) -> bool {
        self.leave_type == Some(LeaveType::Paternity)
    }

    /// Returns true when the selected leave type is policy-bound.
    pub fn is_policy_bound(&self) -> bool {
        self.leave_type.is_some_and(|t| t.is_policy_bound())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_input_uses_defaults() {
        let json = r#"{
            "leave_type": "sick",
            "date_from": "2024-03-04",
            "date_to": "2024-03-05",
            "reason": "Flu"
        }"#;

        let input: LeaveRequestInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.leave_type, Some(LeaveType::Sick));
        assert_eq!(input.date_from, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(input.maternity_type, MaternityType::Prenatal);
        assert_eq!(input.allocation_days, 0);
        assert_eq!(input.documents, SupportingDocuments::default());
    }

    #[test]
    fn test_deserialize_maternity_input() {
        let json = r#"{
            "leave_type": "maternity",
            "date_from": "2024-01-01",
            "reason": "Delivery",
            "maternity_type": "normal",
            "is_solo_parent": true,
            "has_solo_parent_document": true,
            "delivery_date": "2024-01-03",
            "will_allocate": true,
            "allocation_days": 5
        }"#;

        let input: LeaveRequestInput = serde_json::from_str(json).unwrap();
        assert!(input.is_maternity());
        assert!(input.can_claim_solo_parent_bonus());
        assert_eq!(input.effective_allocation_days(), 5);
    }

    #[test]
    fn test_solo_parent_bonus_requires_document() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
        input.is_solo_parent = true;
        assert!(!input.can_claim_solo_parent_bonus());

        input.has_solo_parent_document = true;
        assert!(input.can_claim_solo_parent_bonus());
    }

    #[test]
    fn test_attached_solo_parent_id_counts_as_held() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
        input.is_solo_parent = true;
        input.documents.solo_parent_document = Some("solo-id.jpg".to_string());
        assert!(input.holds_solo_parent_document());
        assert!(input.can_claim_solo_parent_bonus());
    }

    #[test]
    fn test_allocation_ignored_when_not_allocating() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
        input.allocation_days = 4;
        assert_eq!(input.effective_allocation_days(), 0);
    }

    #[test]
    fn test_policy_bound_detection() {
        assert!(LeaveRequestInput::for_leave_type(LeaveType::Paternity).is_policy_bound());
        assert!(!LeaveRequestInput::for_leave_type(LeaveType::Unpaid).is_policy_bound());

        let mut input = LeaveRequestInput::default();
        input.leave_type = None;
        assert!(!input.is_policy_bound());
    }
}
