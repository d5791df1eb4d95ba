//! Leave credit model.
//!
//! A [`LeaveCredit`] tracks the yearly allocation of a credit-tracked leave
//! type for one employee. A total of zero means the allocation is unlimited.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::LeaveType;

/// Yearly leave credits for one employee and leave type.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveCredit, LeaveType};
///
/// let mut credit = LeaveCredit::new("emp_001", LeaveType::Vacation, 2025, 15);
/// assert!(credit.has_enough_credits(10));
///
/// credit.use_credits(10);
/// assert_eq!(credit.remaining(), Some(5));
/// assert!(!credit.has_enough_credits(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCredit {
    /// The employee the credits belong to.
    pub employee_id: String,
    /// The credit-tracked leave type.
    pub leave_type: LeaveType,
    /// Calendar year the credits apply to.
    pub year: i32,
    /// Total allocated credits for the year (0 = unlimited).
    pub total_credits: u32,
    /// Credits consumed by approved leave.
    pub used_credits: u32,
    /// Last time the used credits were reset.
    #[serde(default)]
    pub last_reset_at: Option<NaiveDateTime>,
}

impl LeaveCredit {
    /// Creates a credit record with nothing used.
    pub fn new(
        employee_id: impl Into<String>,
        leave_type: LeaveType,
        year: i32,
        total_credits: u32,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            leave_type,
            year,
            total_credits,
            used_credits: 0,
            last_reset_at: None,
        }
    }

    /// Returns true when the allocation has no ceiling.
    pub fn is_unlimited(&self) -> bool {
        self.total_credits == 0
    }

    /// Remaining credits, or `None` when unlimited. Never negative.
    pub fn remaining(&self) -> Option<u32> {
        if self.is_unlimited() {
            return None;
        }
        Some(self.total_credits.saturating_sub(self.used_credits))
    }

    /// Checks whether a request of `requested_days` fits in the allocation.
    pub fn has_enough_credits(&self, requested_days: u32) -> bool {
        if self.is_unlimited() {
            return true;
        }
        self.used_credits.saturating_add(requested_days) <= self.total_credits
    }

    /// Consumes credits for an approved leave.
    pub fn use_credits(&mut self, days: u32) {
        self.used_credits = self.used_credits.saturating_add(days);
    }

    /// Returns credits when a leave is cancelled or declined.
    pub fn return_credits(&mut self, days: u32) {
        self.used_credits = self.used_credits.saturating_sub(days);
    }

    /// Resets used credits to zero.
    pub fn reset(&mut self, at: NaiveDateTime) {
        self.used_credits = 0;
        self.last_reset_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn credit(total: u32) -> LeaveCredit {
        LeaveCredit::new("emp_001", LeaveType::Sick, 2025, total)
    }

    #[test]
    fn test_zero_total_is_unlimited() {
        let mut credit = credit(0);
        credit.use_credits(400);

        assert!(credit.is_unlimited());
        assert_eq!(credit.remaining(), None);
        assert!(credit.has_enough_credits(1000));
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut credit = credit(5);
        credit.use_credits(8);
        assert_eq!(credit.remaining(), Some(0));
    }

    #[test]
    fn test_has_enough_credits_boundary() {
        let mut credit = credit(15);
        credit.use_credits(10);

        assert!(credit.has_enough_credits(5));
        assert!(!credit.has_enough_credits(6));
    }

    #[test]
    fn test_return_credits_floors_at_zero() {
        let mut credit = credit(15);
        credit.use_credits(3);
        credit.return_credits(5);
        assert_eq!(credit.used_credits, 0);
    }

    #[test]
    fn test_reset_records_timestamp() {
        let mut credit = credit(15);
        credit.use_credits(7);

        let at = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        credit.reset(at);

        assert_eq!(credit.used_credits, 0);
        assert_eq!(credit.last_reset_at, Some(at));
    }
}
