//! Leave request validation.
//!
//! Every rule is evaluated and every failure collected, so the employee sees
//! all problems in one pass. An empty [`ValidationErrors`] means submittable.

use chrono::NaiveDate;

use crate::models::{
    LeaveComputation, LeaveField, LeaveRequestInput, MaternityType, ValidationErrors,
};

use super::credit_check::{CreditBalance, validate_credits};
use super::date_span::days_between;
use super::maternity::{MAX_ALLOCATION_DAYS, MIN_POSTNATAL_DAYS, max_prenatal_days};
use super::paternity::{PATERNITY_WINDOW_DAYS, is_within_paternity_window};

/// Longest accepted reason, in characters.
pub const REASON_MAX_CHARS: usize = 500;

/// What a request is validated against besides its own fields.
///
/// `today` is the reference date for the past-date and notice rules. The
/// notice and credit balance come from the policy catalog and the ledger;
/// without a balance no credit check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// The day the request is made.
    pub today: NaiveDate,
    /// Days of notice required before the start date; zero for none.
    pub notice_days: u32,
    /// Credits left in the pool this leave type draws from.
    pub credit_balance: Option<CreditBalance>,
}

impl ValidationContext {
    /// Creates a context with no notice requirement and no credit check.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            notice_days: 0,
            credit_balance: None,
        }
    }

    /// Sets the required notice.
    pub fn with_notice_days(mut self, notice_days: u32) -> Self {
        self.notice_days = notice_days;
        self
    }

    /// Sets the balance to check the day count against.
    pub fn with_credit_balance(mut self, balance: CreditBalance) -> Self {
        self.credit_balance = Some(balance);
        self
    }
}

/// Validates a leave request against its current computation.
///
/// `computed` must be the result of [`super::compute_days_and_end_date`] for
/// the same input: the end date, the prenatal limit and the credit check all
/// read from it.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{ValidationContext, compute_days_and_end_date, validate};
/// use leave_engine::models::{LeaveField, LeaveRequestInput, LeaveType};
/// use chrono::NaiveDate;
///
/// let mut input = LeaveRequestInput::for_leave_type(LeaveType::Vacation);
/// input.date_from = NaiveDate::from_ymd_opt(2024, 1, 10);
/// input.date_to = NaiveDate::from_ymd_opt(2024, 1, 1);
///
/// let context = ValidationContext::new(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
/// let errors = validate(&input, &compute_days_and_end_date(&input), &context);
/// assert_eq!(errors.get(LeaveField::DateTo), Some("End date cannot be before start date."));
/// assert!(errors.contains(LeaveField::Reason));
/// ```
pub fn validate(
    input: &LeaveRequestInput,
    computed: &LeaveComputation,
    context: &ValidationContext,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.leave_type.is_none() {
        errors.insert(LeaveField::LeaveType, "Please select a leave type.");
    }
    match input.date_from {
        None => errors.insert(LeaveField::DateFrom, "Start date is required."),
        Some(from) if from < context.today => {
            errors.insert(LeaveField::DateFrom, "Start date cannot be in the past.")
        }
        Some(_) => {}
    }
    match computed.date_to {
        None => errors.insert(LeaveField::DateTo, "End date is required."),
        Some(to) if to < context.today && !input.is_policy_bound() => {
            errors.insert(LeaveField::DateTo, "End date cannot be in the past.")
        }
        Some(_) => {}
    }
    if !input.is_policy_bound() {
        if let (Some(from), Some(to)) = (input.date_from, computed.date_to) {
            if to < from {
                errors.insert(LeaveField::DateTo, "End date cannot be before start date.");
            }
        }
    }
    validate_notice(input, context, &mut errors);

    if input.reason.trim().is_empty() {
        errors.insert(LeaveField::Reason, "A reason for the leave is required.");
    } else if input.reason.chars().count() > REASON_MAX_CHARS {
        errors.insert(
            LeaveField::Reason,
            format!("Reason must not exceed {} characters.", REASON_MAX_CHARS),
        );
    }

    if input.is_maternity() {
        validate_maternity(input, computed, &mut errors);
    }
    if input.is_paternity() {
        validate_paternity(input, &mut errors);
    }

    if let Some(balance) = context.credit_balance {
        if let Some(message) = validate_credits(balance.pool, computed.days, balance.remaining) {
            errors.insert(LeaveField::Days, message);
        }
    }

    errors
}

fn validate_notice(
    input: &LeaveRequestInput,
    context: &ValidationContext,
    errors: &mut ValidationErrors,
) {
    if context.notice_days == 0 {
        return;
    }
    if let (Some(leave_type), Some(from)) = (input.leave_type, input.date_from) {
        if days_between(context.today, from) < i64::from(context.notice_days) {
            errors.insert(
                LeaveField::DateFrom,
                format!(
                    "Minimum notice for {}: {} day(s) before start date.",
                    leave_type.label(),
                    context.notice_days
                ),
            );
        }
    }
}

fn validate_maternity(
    input: &LeaveRequestInput,
    computed: &LeaveComputation,
    errors: &mut ValidationErrors,
) {
    match input.delivery_date {
        None => errors.insert(
            LeaveField::DeliveryDate,
            format!(
                "An {} date is required.",
                input.maternity_type.delivery_date_wording()
            ),
        ),
        Some(delivery_date) => match (input.maternity_type, input.date_from) {
            (MaternityType::Prenatal, Some(date_from)) if date_from < delivery_date => {
                let prenatal_days_taken = days_between(date_from, delivery_date);
                let max_prenatal = max_prenatal_days(computed.days);
                if prenatal_days_taken > max_prenatal {
                    errors.insert(
                        LeaveField::DateFrom,
                        format!(
                            "Leave must start no more than {} days before the expected delivery to ensure at least {} postnatal days.",
                            max_prenatal, MIN_POSTNATAL_DAYS
                        ),
                    );
                }
            }
            _ => {}
        },
    }

    if input.will_allocate
        && (input.allocation_days == 0 || input.allocation_days > MAX_ALLOCATION_DAYS)
    {
        errors.insert(
            LeaveField::AllocationDays,
            format!("Must be between 1 and {} days.", MAX_ALLOCATION_DAYS),
        );
    }

    if input.documents.medical_document.is_none() {
        errors.insert(LeaveField::MedicalDocument, "Medical certificate is required.");
    }
    if input.is_solo_parent && !input.holds_solo_parent_document() {
        errors.insert(
            LeaveField::SoloParentDocument,
            "Solo Parent ID is required to claim the 15-day benefit.",
        );
    }
}

fn validate_paternity(input: &LeaveRequestInput, errors: &mut ValidationErrors) {
    match input.childs_dob {
        None => errors.insert(
            LeaveField::ChildsDob,
            "Child's date of birth or miscarriage is required.",
        ),
        Some(childs_dob) => {
            let outside_window = input
                .date_from
                .is_some_and(|date_from| !is_within_paternity_window(date_from, childs_dob));
            if outside_window {
                errors.insert(
                    LeaveField::DateFrom,
                    format!(
                        "Paternity leave must be availed within {} days of childbirth/miscarriage.",
                        PATERNITY_WINDOW_DAYS
                    ),
                );
            }
        }
    }

    if !input.is_eligible_paternity {
        errors.insert(
            LeaveField::IsEligiblePaternity,
            "You must confirm eligibility to proceed.",
        );
    }
    if input.documents.marriage_cert.is_none() {
        errors.insert(LeaveField::MarriageCert, "Marriage certificate is required.");
    }
    if input.documents.birth_cert.is_none() {
        errors.insert(
            LeaveField::BirthCert,
            "Child's birth or medical certificate is required.",
        );
    }
}
