//! Paternity leave entitlement.
//!
//! Paternity leave (RA 8187) is a flat 7 days that must start within 60 days
//! of the child's birth or the miscarriage.

use chrono::NaiveDate;

use crate::models::AuditStep;

use super::date_span::{add_days, inclusive_end_date};

/// Flat paternity entitlement.
pub const PATERNITY_DAYS: u32 = 7;

/// Paternity leave must start within this many days of the birth/miscarriage.
pub const PATERNITY_WINDOW_DAYS: u32 = 60;

/// Statute behind the paternity rules.
pub const PATERNITY_LEGAL_BASIS: &str = "RA 8187";

/// The result of a paternity entitlement calculation.
#[derive(Debug, Clone)]
pub struct PaternityEntitlement {
    /// Always [`PATERNITY_DAYS`].
    pub days: u32,
    /// Last day of leave.
    pub date_to: Option<NaiveDate>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the paternity entitlement for a leave starting on `date_from`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_paternity_entitlement;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
/// let result = calculate_paternity_entitlement(from, 1);
///
/// assert_eq!(result.days, 7);
/// assert_eq!(result.date_to, NaiveDate::from_ymd_opt(2024, 5, 8));
/// ```
pub fn calculate_paternity_entitlement(date_from: NaiveDate, step_number: u32) -> PaternityEntitlement {
    let date_to = inclusive_end_date(date_from, PATERNITY_DAYS);

    let audit_step = AuditStep {
        step_number,
        rule_id: "paternity_entitlement".to_string(),
        rule_name: "Paternity Entitlement".to_string(),
        legal_basis: PATERNITY_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "date_from": date_from
        }),
        output: serde_json::json!({
            "days": PATERNITY_DAYS,
            "date_to": date_to
        }),
        reasoning: format!("Paternity leave is a flat {} days", PATERNITY_DAYS),
    };

    PaternityEntitlement {
        days: PATERNITY_DAYS,
        date_to,
        audit_step,
    }
}

/// Last start date allowed for paternity leave after the given birth date.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::paternity_window_end;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(paternity_window_end(dob), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// ```
pub fn paternity_window_end(childs_dob: NaiveDate) -> NaiveDate {
    add_days(childs_dob, PATERNITY_WINDOW_DAYS)
}

/// Returns true when a leave starting on `date_from` is inside the window.
pub fn is_within_paternity_window(date_from: NaiveDate, childs_dob: NaiveDate) -> bool {
    date_from <= paternity_window_end(childs_dob)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_always_seven() {
        for from in [date(2024, 1, 1), date(2024, 2, 26), date(2025, 12, 31)] {
            let result = calculate_paternity_entitlement(from, 1);
            assert_eq!(result.days, 7);
            assert_eq!(result.date_to, Some(add_days(from, 6)));
        }
    }

    #[test]
    fn test_audit_step_records_end_date() {
        let result = calculate_paternity_entitlement(date(2024, 2, 26), 2);
        assert_eq!(result.audit_step.rule_id, "paternity_entitlement");
        assert_eq!(result.audit_step.output["date_to"], "2024-03-03");
        assert_eq!(result.audit_step.legal_basis, "RA 8187");
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let dob = date(2024, 1, 1);
        assert!(is_within_paternity_window(date(2024, 3, 1), dob));
        assert!(!is_within_paternity_window(date(2024, 3, 2), dob));
    }

    #[test]
    fn test_leave_before_birth_is_within_window() {
        assert!(is_within_paternity_window(date(2023, 12, 25), date(2024, 1, 1)));
    }
}
