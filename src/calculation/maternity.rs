//! Maternity leave entitlement.
//!
//! This module computes the maternity day count under the Expanded Maternity
//! Leave Law (RA 11210): 105 days for live births, 15 more for a documented
//! solo parent, 60 days for miscarriage or emergency termination, and up to
//! 7 days transferable to an alternate caregiver.

use crate::models::{AuditStep, MaternityType};

/// Base entitlement for prenatal or normal delivery.
pub const MATERNITY_NORMAL_DAYS: u32 = 105;

/// Additional days when the solo-parent bonus applies.
pub const MATERNITY_SOLO_PARENT_BONUS: u32 = 15;

/// Flat entitlement for miscarriage or emergency termination.
pub const MATERNITY_MISCARRIAGE_DAYS: u32 = 60;

/// Minimum days that must fall after the delivery date.
pub const MIN_POSTNATAL_DAYS: u32 = 60;

/// Ceiling on days allocated to an alternate caregiver.
pub const MAX_ALLOCATION_DAYS: u32 = 7;

/// Statute behind the maternity rules.
pub const MATERNITY_LEGAL_BASIS: &str = "RA 11210";

/// The result of a maternity entitlement calculation.
#[derive(Debug, Clone)]
pub struct MaternityEntitlement {
    /// Entitlement before any allocation (105, 120 or 60).
    pub original_days: u32,
    /// Days transferred to the alternate caregiver.
    pub allocated_days: u32,
    /// Days remaining for the claimant.
    pub days: u32,
    /// Whether the solo-parent bonus was counted.
    pub solo_parent_bonus_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the maternity entitlement.
///
/// # Arguments
///
/// * `maternity_type` - The kind of maternity application
/// * `can_claim_solo_parent_bonus` - Solo parent declared AND documented
/// * `allocation_days` - Days allocated to the alternate caregiver (0 when not allocating)
/// * `step_number` - The step number for audit trail sequencing
///
/// Allocation reduces the claimant's remaining days, not the total legal
/// entitlement, which stays available as `original_days`. Miscarriage
/// ignores both the bonus and the allocation.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_maternity_entitlement;
/// use leave_engine::models::MaternityType;
///
/// let result = calculate_maternity_entitlement(MaternityType::Normal, true, 5, 1);
/// assert_eq!(result.original_days, 120);
/// assert_eq!(result.days, 115);
///
/// let miscarriage = calculate_maternity_entitlement(MaternityType::Miscarriage, true, 5, 1);
/// assert_eq!(miscarriage.days, 60);
/// ```
pub fn calculate_maternity_entitlement(
    maternity_type: MaternityType,
    can_claim_solo_parent_bonus: bool,
    allocation_days: u32,
    step_number: u32,
) -> MaternityEntitlement {
    let (original_days, allocated_days, bonus_applied) = if maternity_type.is_live_birth() {
        let bonus = if can_claim_solo_parent_bonus {
            MATERNITY_SOLO_PARENT_BONUS
        } else {
            0
        };
        (
            MATERNITY_NORMAL_DAYS + bonus,
            allocation_days,
            can_claim_solo_parent_bonus,
        )
    } else {
        (MATERNITY_MISCARRIAGE_DAYS, 0, false)
    };

    let days = original_days.saturating_sub(allocated_days);

    let reasoning = match maternity_type {
        MaternityType::Miscarriage => format!(
            "Miscarriage/emergency termination: flat {} days",
            MATERNITY_MISCARRIAGE_DAYS
        ),
        _ => {
            let mut parts = vec![format!("{} base days", MATERNITY_NORMAL_DAYS)];
            if bonus_applied {
                parts.push(format!(
                    "+ {} solo-parent days",
                    MATERNITY_SOLO_PARENT_BONUS
                ));
            }
            if allocated_days > 0 {
                parts.push(format!("- {} allocated to caregiver", allocated_days));
            }
            format!("{} = {} days", parts.join(" "), days)
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "maternity_entitlement".to_string(),
        rule_name: "Maternity Entitlement".to_string(),
        legal_basis: MATERNITY_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "maternity_type": maternity_type,
            "can_claim_solo_parent_bonus": can_claim_solo_parent_bonus,
            "allocation_days": allocation_days
        }),
        output: serde_json::json!({
            "original_days": original_days,
            "allocated_days": allocated_days,
            "days": days,
            "solo_parent_bonus_applied": bonus_applied
        }),
        reasoning,
    };

    MaternityEntitlement {
        original_days,
        allocated_days,
        days,
        solo_parent_bonus_applied: bonus_applied,
        audit_step,
    }
}

/// Longest prenatal stretch a maternity leave of `total_days` may have
/// while still leaving [`MIN_POSTNATAL_DAYS`] after delivery.
///
/// Negative when `total_days` cannot cover the postnatal minimum at all.
pub fn max_prenatal_days(total_days: u32) -> i64 {
    i64::from(total_days) - i64::from(MIN_POSTNATAL_DAYS)
}
