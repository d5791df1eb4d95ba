//! Final confirmation of maternity details by HR.
//!
//! After delivery, HR confirms the final application type, the actual
//! delivery date, the solo-parent status and any allocation, and the leave
//! duration is recalculated from the original start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, MaternityDetails, MaternityType};

use super::date_span::inclusive_end_date;
use super::maternity::{MAX_ALLOCATION_DAYS, calculate_maternity_entitlement};

/// The details HR confirms when finalizing a maternity leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaternityFinalization {
    /// Final application type.
    pub maternity_type: MaternityType,
    /// Solo-parent status as verified by HR.
    #[serde(default)]
    pub is_solo_parent: bool,
    /// Confirmed actual delivery date.
    #[serde(default)]
    pub actual_delivery_date: Option<NaiveDate>,
    /// Requested allocation; clamped to `0..=7`.
    #[serde(default)]
    pub allocation_days: i64,
}

/// The outcome of a maternity finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedMaternity {
    /// The updated maternity details.
    pub details: MaternityDetails,
    /// Recalculated leave days.
    pub days: u32,
    /// Recalculated end date.
    pub date_to: Option<NaiveDate>,
    /// The audit step recording the recalculation.
    pub audit_step: AuditStep,
}

/// Clamps a requested allocation into `0..=MAX_ALLOCATION_DAYS`.
pub fn clamp_allocation_days(requested: i64) -> u32 {
    requested.clamp(0, i64::from(MAX_ALLOCATION_DAYS)) as u32
}

/// Recalculates a maternity leave from HR-confirmed details.
///
/// HR verification replaces the document check, so the solo-parent status is
/// taken as given. Miscarriage always clears the allocation.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{finalize_maternity, MaternityFinalization};
/// use leave_engine::models::{MaternityDetails, MaternityType};
/// use chrono::NaiveDate;
///
/// let existing = MaternityDetails {
///     maternity_type: MaternityType::Prenatal,
///     is_solo_parent: false,
///     delivery_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     actual_delivery_date: None,
///     allocation_days: 0,
///     medical_document_name: None,
///     solo_parent_document_name: None,
/// };
/// let update = MaternityFinalization {
///     maternity_type: MaternityType::Normal,
///     is_solo_parent: true,
///     actual_delivery_date: NaiveDate::from_ymd_opt(2024, 2, 3),
///     allocation_days: 12,
/// };
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let result = finalize_maternity(from, &existing, &update);
/// assert_eq!(result.details.allocation_days, 7);
/// assert_eq!(result.days, 113);
/// ```
pub fn finalize_maternity(
    date_from: NaiveDate,
    existing: &MaternityDetails,
    update: &MaternityFinalization,
) -> FinalizedMaternity {
    let allocation_days = match update.maternity_type {
        MaternityType::Miscarriage => 0,
        _ => clamp_allocation_days(update.allocation_days),
    };

    let entitlement = calculate_maternity_entitlement(
        update.maternity_type,
        update.is_solo_parent,
        allocation_days,
        1,
    );

    let details = MaternityDetails {
        maternity_type: update.maternity_type,
        is_solo_parent: update.is_solo_parent,
        actual_delivery_date: update.actual_delivery_date,
        allocation_days,
        ..existing.clone()
    };

    let mut audit_step = entitlement.audit_step;
    audit_step.rule_id = "maternity_finalization".to_string();
    audit_step.rule_name = "Maternity Finalization".to_string();

    FinalizedMaternity {
        details,
        days: entitlement.days,
        date_to: inclusive_end_date(date_from, entitlement.days),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn existing() -> MaternityDetails {
        MaternityDetails {
            maternity_type: MaternityType::Prenatal,
            is_solo_parent: false,
            delivery_date: date(2024, 2, 1),
            actual_delivery_date: None,
            allocation_days: 2,
            medical_document_name: Some("med.pdf".to_string()),
            solo_parent_document_name: None,
        }
    }

    fn update(maternity_type: MaternityType, allocation_days: i64) -> MaternityFinalization {
        MaternityFinalization {
            maternity_type,
            is_solo_parent: false,
            actual_delivery_date: Some(date(2024, 2, 3)),
            allocation_days,
        }
    }

    #[test]
    fn test_clamp_allocation_days() {
        assert_eq!(clamp_allocation_days(-3), 0);
        assert_eq!(clamp_allocation_days(4), 4);
        assert_eq!(clamp_allocation_days(99), 7);
    }

    #[test]
    fn test_normal_finalization_recalculates_end_date() {
        let result = finalize_maternity(date(2024, 1, 1), &existing(), &update(MaternityType::Normal, 0));
        assert_eq!(result.days, 105);
        assert_eq!(result.date_to, Some(date(2024, 4, 14)));
        assert_eq!(result.details.actual_delivery_date, Some(date(2024, 2, 3)));
        assert_eq!(result.audit_step.rule_id, "maternity_finalization");
    }

    #[test]
    fn test_miscarriage_clears_allocation() {
        let result =
            finalize_maternity(date(2024, 1, 1), &existing(), &update(MaternityType::Miscarriage, 5));
        assert_eq!(result.details.allocation_days, 0);
        assert_eq!(result.days, 60);
    }

    #[test]
    fn test_hr_confirmed_solo_parent_needs_no_document() {
        let mut confirmed = update(MaternityType::Normal, 0);
        confirmed.is_solo_parent = true;

        let result = finalize_maternity(date(2024, 1, 1), &existing(), &confirmed);
        assert_eq!(result.days, 120);
        assert!(result.details.is_solo_parent);
    }

    #[test]
    fn test_untouched_details_are_preserved() {
        let result = finalize_maternity(date(2024, 1, 1), &existing(), &update(MaternityType::Normal, 1));
        assert_eq!(result.details.delivery_date, date(2024, 2, 1));
        assert_eq!(result.details.medical_document_name.as_deref(), Some("med.pdf"));
    }
}
