//! Day count and end date derivation for every leave type.
//!
//! This is the entry point the form host calls on every change to the dates,
//! the leave type, or the maternity flags.

use crate::models::{AuditStep, LeaveComputation, LeaveRequestInput, LeaveType};

use super::date_span::{inclusive_day_count, inclusive_end_date};
use super::maternity::calculate_maternity_entitlement;
use super::paternity::calculate_paternity_entitlement;

/// Entitlement computation with its audit trail.
#[derive(Debug, Clone)]
pub struct EntitlementResult {
    /// The derived days and end date.
    pub computation: LeaveComputation,
    /// Maternity entitlement before allocation, for display alongside `days`.
    pub original_days: Option<u32>,
    /// Steps explaining how the computation was reached.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes days and end date, recording an audit step for the rule applied.
///
/// Rules are evaluated in priority order:
/// 1. Maternity with a start date: statutory entitlement, end date derived.
/// 2. Paternity with a start date: flat 7 days, end date derived.
/// 3. Any other type with both dates: inclusive count, 0 if reversed.
/// 4. Otherwise zero days; a user-entered end date is echoed back for
///    ordinary types and dropped for policy-bound ones.
pub fn calculate_entitlement(input: &LeaveRequestInput) -> EntitlementResult {
    let step_number = 1;

    match (input.leave_type, input.date_from) {
        (Some(LeaveType::Maternity), Some(date_from)) => {
            let maternity = calculate_maternity_entitlement(
                input.maternity_type,
                input.can_claim_solo_parent_bonus(),
                input.effective_allocation_days(),
                step_number,
            );
            EntitlementResult {
                computation: LeaveComputation {
                    days: maternity.days,
                    date_to: inclusive_end_date(date_from, maternity.days),
                },
                original_days: Some(maternity.original_days),
                audit_steps: vec![maternity.audit_step],
            }
        }
        (Some(LeaveType::Paternity), Some(date_from)) => {
            let paternity = calculate_paternity_entitlement(date_from, step_number);
            EntitlementResult {
                computation: LeaveComputation {
                    days: paternity.days,
                    date_to: paternity.date_to,
                },
                original_days: None,
                audit_steps: vec![paternity.audit_step],
            }
        }
        (leave_type, Some(date_from)) if !input.is_policy_bound() => match input.date_to {
            Some(date_to) => {
                let days = inclusive_day_count(date_from, date_to);
                let audit_step = AuditStep {
                    step_number,
                    rule_id: "inclusive_day_count".to_string(),
                    rule_name: "Inclusive Day Count".to_string(),
                    legal_basis: "Company leave policy".to_string(),
                    input: serde_json::json!({
                        "leave_type": leave_type,
                        "date_from": date_from,
                        "date_to": date_to
                    }),
                    output: serde_json::json!({ "days": days }),
                    reasoning: if days == 0 {
                        "End date is before start date: 0 days".to_string()
                    } else {
                        format!("{} to {} inclusive = {} days", date_from, date_to, days)
                    },
                };
                EntitlementResult {
                    computation: LeaveComputation {
                        days,
                        date_to: Some(date_to),
                    },
                    original_days: None,
                    audit_steps: vec![audit_step],
                }
            }
            None => incomplete(input),
        },
        _ => incomplete(input),
    }
}

/// Computes the day count and end date for a leave request input.
///
/// Pure and deterministic: identical inputs always give identical output.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_days_and_end_date;
/// use leave_engine::models::{LeaveRequestInput, LeaveType, MaternityType};
/// use chrono::NaiveDate;
///
/// let mut input = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
/// input.maternity_type = MaternityType::Normal;
/// input.date_from = NaiveDate::from_ymd_opt(2024, 1, 1);
///
/// let computation = compute_days_and_end_date(&input);
/// assert_eq!(computation.days, 105);
/// assert_eq!(computation.date_to, NaiveDate::from_ymd_opt(2024, 4, 14));
/// ```
pub fn compute_days_and_end_date(input: &LeaveRequestInput) -> LeaveComputation {
    calculate_entitlement(input).computation
}

fn incomplete(input: &LeaveRequestInput) -> EntitlementResult {
    let date_to = if input.is_policy_bound() {
        None
    } else {
        input.date_to
    };

    EntitlementResult {
        computation: LeaveComputation { days: 0, date_to },
        original_days: None,
        audit_steps: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaternityType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ordinary(leave_type: LeaveType, from: NaiveDate, to: NaiveDate) -> LeaveRequestInput {
        let mut input = LeaveRequestInput::for_leave_type(leave_type);
        input.date_from = Some(from);
        input.date_to = Some(to);
        input
    }

    fn maternity(maternity_type: MaternityType, from: NaiveDate) -> LeaveRequestInput {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
        input.maternity_type = maternity_type;
        input.date_from = Some(from);
        input
    }

    #[test]
    fn test_same_day_ordinary_leave_is_one_day() {
        let d = date(2024, 7, 15);
        for leave_type in [
            LeaveType::Vacation,
            LeaveType::Sick,
            LeaveType::Emergency,
            LeaveType::Unpaid,
        ] {
            let result = compute_days_and_end_date(&ordinary(leave_type, d, d));
            assert_eq!(result.days, 1, "{leave_type} same-day leave");
            assert_eq!(result.date_to, Some(d));
        }
    }

    #[test]
    fn test_vacation_ten_days_inclusive() {
        let result =
            compute_days_and_end_date(&ordinary(LeaveType::Vacation, date(2024, 1, 1), date(2024, 1, 10)));
        assert_eq!(result.days, 10);
    }

    #[test]
    fn test_reversed_dates_give_zero_days() {
        let result =
            compute_days_and_end_date(&ordinary(LeaveType::Vacation, date(2024, 1, 10), date(2024, 1, 1)));
        assert_eq!(result.days, 0);
        assert_eq!(result.date_to, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_missing_leave_type_counts_as_ordinary() {
        let mut input = ordinary(LeaveType::Vacation, date(2024, 1, 1), date(2024, 1, 3));
        input.leave_type = None;
        assert_eq!(compute_days_and_end_date(&input).days, 3);
    }

    #[test]
    fn test_ordinary_without_end_date_echoes_nothing() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Sick);
        input.date_from = Some(date(2024, 1, 1));
        assert_eq!(compute_days_and_end_date(&input), LeaveComputation::empty());
    }

    #[test]
    fn test_ordinary_without_start_date_keeps_end_date() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Sick);
        input.date_to = Some(date(2024, 1, 5));

        let result = compute_days_and_end_date(&input);
        assert_eq!(result.days, 0);
        assert_eq!(result.date_to, Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_maternity_normal_from_new_year() {
        let result = compute_days_and_end_date(&maternity(MaternityType::Normal, date(2024, 1, 1)));
        assert_eq!(result.days, 105);
        assert_eq!(result.date_to, Some(date(2024, 4, 14)));
    }

    #[test]
    fn test_maternity_solo_parent_with_document() {
        let mut input = maternity(MaternityType::Normal, date(2024, 1, 1));
        input.is_solo_parent = true;
        input.has_solo_parent_document = true;
        assert_eq!(compute_days_and_end_date(&input).days, 120);
    }

    #[test]
    fn test_maternity_solo_parent_without_document() {
        let mut input = maternity(MaternityType::Normal, date(2024, 1, 1));
        input.is_solo_parent = true;
        input.has_solo_parent_document = false;
        assert_eq!(compute_days_and_end_date(&input).days, 105);
    }

    #[test]
    fn test_maternity_allocation() {
        let mut input = maternity(MaternityType::Normal, date(2024, 1, 1));
        input.will_allocate = true;
        input.allocation_days = 5;

        let result = calculate_entitlement(&input);
        assert_eq!(result.computation.days, 100);
        assert_eq!(result.computation.date_to, Some(date(2024, 4, 9)));
        assert_eq!(result.original_days, Some(105));
    }

    #[test]
    fn test_maternity_allocation_days_without_toggle_ignored() {
        let mut input = maternity(MaternityType::Normal, date(2024, 1, 1));
        input.allocation_days = 5;
        assert_eq!(compute_days_and_end_date(&input).days, 105);
    }

    #[test]
    fn test_maternity_miscarriage_always_sixty() {
        let mut input = maternity(MaternityType::Miscarriage, date(2024, 1, 1));
        input.is_solo_parent = true;
        input.has_solo_parent_document = true;
        input.will_allocate = true;
        input.allocation_days = 7;

        let result = compute_days_and_end_date(&input);
        assert_eq!(result.days, 60);
        assert_eq!(result.date_to, Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_maternity_ignores_user_end_date() {
        let mut input = maternity(MaternityType::Normal, date(2024, 1, 1));
        input.date_to = Some(date(2024, 1, 2));
        assert_eq!(compute_days_and_end_date(&input).date_to, Some(date(2024, 4, 14)));
    }

    #[test]
    fn test_maternity_without_start_date_is_empty() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Maternity);
        input.date_to = Some(date(2024, 4, 14));
        assert_eq!(compute_days_and_end_date(&input), LeaveComputation::empty());
    }

    #[test]
    fn test_paternity_seven_days() {
        let mut input = LeaveRequestInput::for_leave_type(LeaveType::Paternity);
        input.date_from = Some(date(2024, 5, 2));

        let result = compute_days_and_end_date(&input);
        assert_eq!(result.days, 7);
        assert_eq!(result.date_to, Some(date(2024, 5, 8)));
    }

    #[test]
    fn test_audit_trail_has_one_step_per_rule() {
        let input = ordinary(LeaveType::Sick, date(2024, 1, 1), date(2024, 1, 2));
        let result = calculate_entitlement(&input);

        assert_eq!(result.audit_steps.len(), 1);
        assert_eq!(result.audit_steps[0].rule_id, "inclusive_day_count");
        assert_eq!(
            result.audit_steps[0].reasoning,
            "2024-01-01 to 2024-01-02 inclusive = 2 days"
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut input = maternity(MaternityType::Prenatal, date(2024, 3, 1));
        input.is_solo_parent = true;
        input.has_solo_parent_document = true;

        assert_eq!(
            compute_days_and_end_date(&input),
            compute_days_and_end_date(&input)
        );
    }
}
