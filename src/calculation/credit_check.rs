//! Leave credit sufficiency check.
//!
//! Emergency leave has no balance of its own and is charged against the
//! Vacation pool; the catalog records which pool each type draws from.

use serde::{Deserialize, Serialize};

use crate::models::LeaveType;

/// Credits left in the pool a request is charged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBalance {
    /// The credit-tracked leave type whose balance is charged.
    pub pool: LeaveType,
    /// Credits left for the year.
    pub remaining: u32,
}

impl CreditBalance {
    /// Creates a balance for the given pool.
    pub fn new(pool: LeaveType, remaining: u32) -> Self {
        Self { pool, remaining }
    }
}

/// Checks that `days` can be charged against `remaining` credits of `pool`.
///
/// Returns the message to show on the day count, or `None` when the
/// request fits.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::validate_credits;
/// use leave_engine::models::LeaveType;
///
/// assert_eq!(
///     validate_credits(LeaveType::Vacation, 60, 15).as_deref(),
///     Some("Insufficient Vacation Leave credits. Remaining: 15, requested: 60.")
/// );
/// assert!(validate_credits(LeaveType::Sick, 3, 15).is_none());
/// ```
pub fn validate_credits(pool: LeaveType, days: u32, remaining: u32) -> Option<String> {
    if remaining == 0 {
        Some(format!("You have 0 remaining {} credits.", pool.label()))
    } else if days > remaining {
        Some(format!(
            "Insufficient {} credits. Remaining: {}, requested: {}.",
            pool.label(),
            remaining,
            days
        ))
    } else {
        None
    }
}
