//! Payload assembly for a validated leave request.

use uuid::Uuid;

use crate::models::{
    LeaveComputation, LeavePayload, LeaveRequestInput, LeaveType, MaternityDetails,
    PaternityDetails, ValidationErrors,
};

use super::validation::{ValidationContext, validate};

/// Validates the input and, when it passes, builds the backend payload.
///
/// The payload's `days` is the computed remainder (after any maternity
/// allocation). The solo-parent flag is forwarded only when the bonus was
/// actually claimable, and allocation is forwarded as zero unless allocating.
///
/// # Arguments
///
/// * `input` - The leave request input
/// * `computed` - The computation for the same input
/// * `leave_id` - The id of the request being edited, if any
/// * `context` - Reference date, notice and credit balance to validate against
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{ValidationContext, compute_days_and_end_date, prepare_submission};
/// use leave_engine::models::{LeaveRequestInput, LeaveType};
/// use chrono::NaiveDate;
///
/// let mut input = LeaveRequestInput::for_leave_type(LeaveType::Paternity);
/// input.date_from = NaiveDate::from_ymd_opt(2024, 5, 2);
/// input.childs_dob = NaiveDate::from_ymd_opt(2024, 5, 1);
/// input.is_eligible_paternity = true;
/// input.reason = "Newborn".to_string();
/// input.documents.marriage_cert = Some("marriage.pdf".to_string());
/// input.documents.birth_cert = Some("birth.pdf".to_string());
///
/// let context = ValidationContext::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
/// let computed = compute_days_and_end_date(&input);
/// let payload = prepare_submission(&input, &computed, None, &context).unwrap();
/// assert_eq!(payload.days, 7);
/// assert!(payload.paternity_details.is_some());
/// ```
pub fn prepare_submission(
    input: &LeaveRequestInput,
    computed: &LeaveComputation,
    leave_id: Option<Uuid>,
    context: &ValidationContext,
) -> Result<LeavePayload, ValidationErrors> {
    let errors = validate(input, computed, context);

    match (input.leave_type, input.date_from, computed.date_to) {
        (Some(leave_type), Some(date_from), Some(date_to)) if errors.is_empty() => {
            Ok(LeavePayload {
                leave_id,
                leave_type,
                date_from,
                date_to,
                reason: input.reason.clone(),
                days: computed.days,
                maternity_details: maternity_details(leave_type, input),
                paternity_details: paternity_details(leave_type, input),
            })
        }
        _ => Err(errors),
    }
}

fn maternity_details(leave_type: LeaveType, input: &LeaveRequestInput) -> Option<MaternityDetails> {
    if leave_type != LeaveType::Maternity {
        return None;
    }
    let delivery_date = input.delivery_date?;

    Some(MaternityDetails {
        maternity_type: input.maternity_type,
        is_solo_parent: input.can_claim_solo_parent_bonus(),
        delivery_date,
        actual_delivery_date: None,
        allocation_days: input.effective_allocation_days(),
        medical_document_name: input.documents.medical_document.clone(),
        solo_parent_document_name: input.documents.solo_parent_document.clone(),
    })
}

fn paternity_details(leave_type: LeaveType, input: &LeaveRequestInput) -> Option<PaternityDetails> {
    if leave_type != LeaveType::Paternity {
        return None;
    }
    let childs_dob = input.childs_dob?;

    Some(PaternityDetails {
        childs_dob,
        is_eligible_paternity: input.is_eligible_paternity,
        marriage_cert_name: input.documents.marriage_cert.clone(),
        birth_cert_name: input.documents.birth_cert.clone(),
    })
}
