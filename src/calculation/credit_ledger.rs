//! In-memory ledger of yearly leave credits.
//!
//! Credits are keyed by employee, leave type and calendar year. A record is
//! created on first use, seeded with the configured default for that year.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveCredit, LeaveType};

use super::credit_check::CreditBalance;

type CreditKey = (String, LeaveType, i32);

/// Yearly leave credits for all employees.
///
/// # Example
///
/// ```no_run
/// use leave_engine::calculation::LeaveCreditLedger;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::LeaveType;
/// use chrono::NaiveDate;
///
/// let config = ConfigLoader::load("./config/leave_policy").unwrap();
/// let mut ledger = LeaveCreditLedger::new();
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let credit = ledger
///     .get_or_create("emp_001", LeaveType::Vacation, today, &config)
///     .unwrap();
/// credit.use_credits(3);
/// assert_eq!(credit.remaining(), Some(12));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaveCreditLedger {
    credits: HashMap<CreditKey, LeaveCredit>,
}

impl LeaveCreditLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the credit record for the year containing `reference_date`,
    /// creating it from the configured default when absent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the leave type does not
    /// draw from yearly credits.
    pub fn get_or_create(
        &mut self,
        employee_id: &str,
        leave_type: LeaveType,
        reference_date: NaiveDate,
        config: &ConfigLoader,
    ) -> EngineResult<&mut LeaveCredit> {
        if !config.get_leave_type(leave_type)?.credit_tracked {
            return Err(EngineError::CalculationError {
                message: format!("{} does not use leave credits", leave_type.label()),
            });
        }

        let year = reference_date.year();
        let credit = self
            .credits
            .entry((employee_id.to_string(), leave_type, year))
            .or_insert_with(|| {
                let total = config.default_credits(leave_type, year);
                debug!(
                    employee_id,
                    leave_type = leave_type.code(),
                    year,
                    total,
                    "Leave credit record created"
                );
                LeaveCredit::new(employee_id, leave_type, year, total)
            });

        Ok(credit)
    }

    /// Remaining credits in the pool `leave_type` is charged to.
    ///
    /// Returns `None` when the type uses no credits or the pool is unlimited
    /// for that year.
    pub fn balance(
        &mut self,
        employee_id: &str,
        leave_type: LeaveType,
        reference_date: NaiveDate,
        config: &ConfigLoader,
    ) -> EngineResult<Option<CreditBalance>> {
        let Some(pool) = config.credit_pool(leave_type)? else {
            return Ok(None);
        };
        let credit = self.get_or_create(employee_id, pool, reference_date, config)?;
        Ok(credit
            .remaining()
            .map(|remaining| CreditBalance::new(pool, remaining)))
    }

    /// Looks up an existing credit record without creating one.
    pub fn find(&self, employee_id: &str, leave_type: LeaveType, year: i32) -> Option<&LeaveCredit> {
        self.credits
            .get(&(employee_id.to_string(), leave_type, year))
    }

    /// Number of credit records held.
    pub fn len(&self) -> usize {
        self.credits.len()
    }

    /// Returns true when no credit records are held.
    pub fn is_empty(&self) -> bool {
        self.credits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConfigLoader {
        ConfigLoader::load("./config/leave_policy").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_created_with_configured_default() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        let credit = ledger
            .get_or_create("emp_001", LeaveType::Vacation, date(2025, 6, 1), &config)
            .unwrap();
        assert_eq!(credit.total_credits, 15);
        assert_eq!(credit.used_credits, 0);
        assert_eq!(credit.year, 2025);
    }

    #[test]
    fn test_existing_record_is_reused() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        ledger
            .get_or_create("emp_001", LeaveType::Sick, date(2025, 1, 10), &config)
            .unwrap()
            .use_credits(4);
        let credit = ledger
            .get_or_create("emp_001", LeaveType::Sick, date(2025, 11, 30), &config)
            .unwrap();

        assert_eq!(credit.used_credits, 4);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_new_year_gets_fresh_record() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        ledger
            .get_or_create("emp_001", LeaveType::Sick, date(2025, 12, 31), &config)
            .unwrap()
            .use_credits(5);
        let next = ledger
            .get_or_create("emp_001", LeaveType::Sick, date(2026, 1, 1), &config)
            .unwrap();

        assert_eq!(next.used_credits, 0);
        assert_eq!(next.remaining(), Some(15));
        assert_eq!(ledger.find("emp_001", LeaveType::Sick, 2025).unwrap().used_credits, 5);
    }

    #[test]
    fn test_year_without_allocation_is_unlimited() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        let credit = ledger
            .get_or_create("emp_002", LeaveType::Vacation, date(2020, 3, 1), &config)
            .unwrap();
        assert!(credit.is_unlimited());
    }

    #[test]
    fn test_untracked_leave_type_rejected() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        let result = ledger.get_or_create("emp_001", LeaveType::Maternity, date(2025, 1, 1), &config);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_emergency_balance_reads_vacation_pool() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        ledger
            .get_or_create("emp_003", LeaveType::Vacation, date(2025, 2, 1), &config)
            .unwrap()
            .use_credits(12);
        let balance = ledger
            .balance("emp_003", LeaveType::Emergency, date(2025, 8, 1), &config)
            .unwrap();

        assert_eq!(balance, Some(CreditBalance::new(LeaveType::Vacation, 3)));
        assert!(ledger.find("emp_003", LeaveType::Emergency, 2025).is_none());
    }

    #[test]
    fn test_no_balance_for_uncredited_or_unlimited() {
        let config = config();
        let mut ledger = LeaveCreditLedger::new();

        let unpaid = ledger.balance("emp_004", LeaveType::Unpaid, date(2025, 1, 1), &config);
        assert_eq!(unpaid.unwrap(), None);

        let before_allocations =
            ledger.balance("emp_004", LeaveType::Vacation, date(2020, 1, 1), &config);
        assert_eq!(before_allocations.unwrap(), None);
    }
}
