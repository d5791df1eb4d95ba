//! Computation result and validation error models.
//!
//! [`LeaveComputation`] is derived from a [`super::LeaveRequestInput`] on every
//! change and never persisted. [`ValidationErrors`] maps form fields to messages.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days and end date derived from a leave request input.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveComputation;
///
/// let computation = LeaveComputation::empty();
/// assert_eq!(computation.days, 0);
/// assert!(computation.date_to.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveComputation {
    /// Total entitlement days for the current inputs.
    pub days: u32,
    /// End date: derived for Maternity/Paternity, the user's own otherwise.
    pub date_to: Option<NaiveDate>,
}

impl LeaveComputation {
    /// A computation with zero days and no end date.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A field of the leave request form that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveField {
    /// The leave type selector.
    LeaveType,
    /// Start date.
    DateFrom,
    /// End date.
    DateTo,
    /// Free-text reason.
    Reason,
    /// Maternity application type.
    MaternityType,
    /// Solo-parent declaration.
    IsSoloParent,
    /// Expected or actual delivery date.
    DeliveryDate,
    /// Allocation toggle.
    WillAllocate,
    /// Days allocated to the alternate caregiver.
    AllocationDays,
    /// Child's date of birth or miscarriage date.
    ChildsDob,
    /// Paternity eligibility confirmation.
    IsEligiblePaternity,
    /// Day count, where leave credits are checked.
    Days,
    /// Medical certificate for maternity leave.
    MedicalDocument,
    /// Solo parent ID.
    SoloParentDocument,
    /// Marriage certificate for paternity leave.
    MarriageCert,
    /// Child's birth or medical certificate for paternity leave.
    BirthCert,
}

impl LeaveField {
    /// Returns the wire name of the field (e.g. "date_from").
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveField::LeaveType => "leave_type",
            LeaveField::DateFrom => "date_from",
            LeaveField::DateTo => "date_to",
            LeaveField::Reason => "reason",
            LeaveField::MaternityType => "maternity_type",
            LeaveField::IsSoloParent => "is_solo_parent",
            LeaveField::DeliveryDate => "delivery_date",
            LeaveField::WillAllocate => "will_allocate",
            LeaveField::AllocationDays => "allocation_days",
            LeaveField::ChildsDob => "childs_dob",
            LeaveField::IsEligiblePaternity => "is_eligible_paternity",
            LeaveField::Days => "days",
            LeaveField::MedicalDocument => "medical_document",
            LeaveField::SoloParentDocument => "solo_parent_document",
            LeaveField::MarriageCert => "marriage_cert",
            LeaveField::BirthCert => "birth_cert",
        }
    }
}

impl std::fmt::Display for LeaveField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-level validation failures, one message per field.
///
/// An empty set means the request can be submitted. Serializes as a plain
/// JSON object keyed by field name.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveField, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// assert!(errors.is_empty());
///
/// errors.insert(LeaveField::Reason, "A reason for the leave is required.");
/// assert_eq!(errors.get(LeaveField::Reason), Some("A reason for the leave is required."));
/// assert_eq!(
///     serde_json::to_string(&errors).unwrap(),
///     r#"{"reason":"A reason for the leave is required."}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<LeaveField, String>);

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: LeaveField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the message recorded for a field.
    pub fn get(&self, field: LeaveField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns true when the field has an error.
    pub fn contains(&self, field: LeaveField) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true when there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (LeaveField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Returns the fields that have errors.
    pub fn fields(&self) -> Vec<LeaveField> {
        self.0.keys().copied().collect()
    }
}
