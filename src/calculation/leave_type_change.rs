//! Input reset when the leave type changes.
//!
//! Switching leave type starts from a fresh input and copies back only the
//! fields listed in [`CARRY_OVER_FIELDS`].

use crate::models::{LeaveField, LeaveRequestInput, LeaveType};

/// Fields that survive a leave type change.
pub const CARRY_OVER_FIELDS: [LeaveField; 2] = [LeaveField::Reason, LeaveField::DateFrom];

/// Returns the input to use after switching to `new_type`.
///
/// Every type-specific field (documents, solo-parent flags, maternity and
/// paternity details, allocation, the end date) returns to its default.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::on_leave_type_change;
/// use leave_engine::models::{LeaveRequestInput, LeaveType};
/// use chrono::NaiveDate;
///
/// let mut prior = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
/// prior.reason = "Delivery".to_string();
/// prior.date_from = NaiveDate::from_ymd_opt(2024, 1, 1);
/// prior.is_solo_parent = true;
///
/// let reset = on_leave_type_change(Some(LeaveType::Sick), &prior);
/// assert_eq!(reset.leave_type, Some(LeaveType::Sick));
/// assert_eq!(reset.reason, "Delivery");
/// assert_eq!(reset.date_from, prior.date_from);
/// assert!(!reset.is_solo_parent);
/// ```
pub fn on_leave_type_change(
    new_type: Option<LeaveType>,
    prior: &LeaveRequestInput,
) -> LeaveRequestInput {
    let mut reset = LeaveRequestInput {
        leave_type: new_type,
        ..LeaveRequestInput::default()
    };

    for field in CARRY_OVER_FIELDS {
        carry_over(field, prior, &mut reset);
    }

    reset
}

fn carry_over(field: LeaveField, from: &LeaveRequestInput, into: &mut LeaveRequestInput) {
    match field {
        LeaveField::Reason => into.reason = from.reason.clone(),
        LeaveField::DateFrom => into.date_from = from.date_from,
        LeaveField::DateTo => into.date_to = from.date_to,
        LeaveField::MaternityType => into.maternity_type = from.maternity_type,
        LeaveField::IsSoloParent => into.is_solo_parent = from.is_solo_parent,
        LeaveField::DeliveryDate => into.delivery_date = from.delivery_date,
        LeaveField::WillAllocate => into.will_allocate = from.will_allocate,
        LeaveField::AllocationDays => into.allocation_days = from.allocation_days,
        LeaveField::ChildsDob => into.childs_dob = from.childs_dob,
        LeaveField::IsEligiblePaternity => into.is_eligible_paternity = from.is_eligible_paternity,
        LeaveField::MedicalDocument => {
            into.documents.medical_document = from.documents.medical_document.clone()
        }
        LeaveField::SoloParentDocument => {
            into.documents.solo_parent_document = from.documents.solo_parent_document.clone();
            into.has_solo_parent_document = from.has_solo_parent_document;
        }
        LeaveField::MarriageCert => {
            into.documents.marriage_cert = from.documents.marriage_cert.clone()
        }
        LeaveField::BirthCert => into.documents.birth_cert = from.documents.birth_cert.clone(),
        LeaveField::LeaveType | LeaveField::Days => {}
    }
}
