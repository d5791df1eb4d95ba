//! Application state for the Leave Entitlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::calculation::{CreditBalance, LeaveCreditLedger};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::LeaveType;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded leave policy and the yearly credit ledger.
#[derive(Clone)]
pub struct AppState {
    /// The loaded leave policy.
    config: Arc<ConfigLoader>,
    /// Leave credits by employee, pool and year.
    ledger: Arc<Mutex<LeaveCreditLedger>>,
}

impl AppState {
    /// Creates a new application state with an empty credit ledger.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_ledger(config, LeaveCreditLedger::new())
    }

    /// Creates a new application state around an existing credit ledger.
    pub fn with_ledger(config: ConfigLoader, ledger: LeaveCreditLedger) -> Self {
        Self {
            config: Arc::new(config),
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Remaining credits in the pool `leave_type` is charged to, for the
    /// year containing `reference_date`.
    pub fn credit_balance(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        reference_date: NaiveDate,
    ) -> EngineResult<Option<CreditBalance>> {
        let mut ledger = self
            .ledger
            .lock()
            .map_err(|_| EngineError::CalculationError {
                message: "leave credit ledger is unavailable".to_string(),
            })?;
        ledger.balance(employee_id, leave_type, reference_date, &self.config)
    }
}
