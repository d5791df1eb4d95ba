//! Calculation logic for the Leave Entitlement Engine.
//!
//! This module contains the leave day counting and validation functions,
//! including inclusive date spans, statutory maternity and paternity
//! entitlements, field validation with credit checks, leave type switching,
//! payload assembly, maternity finalization, and the yearly leave credit
//! ledger.

mod credit_check;
mod credit_ledger;
mod date_span;
mod entitlement;
mod leave_type_change;
mod maternity;
mod maternity_finalization;
mod paternity;
mod submission;
mod validation;

pub use credit_check::{CreditBalance, validate_credits};
pub use credit_ledger::LeaveCreditLedger;
pub use date_span::{
    FORM_DATE_FORMAT, add_days, days_between, inclusive_day_count, inclusive_end_date,
    parse_form_date,
};
pub use entitlement::{EntitlementResult, calculate_entitlement, compute_days_and_end_date};
pub use leave_type_change::{CARRY_OVER_FIELDS, on_leave_type_change};
pub use maternity::{
    MATERNITY_LEGAL_BASIS, MATERNITY_MISCARRIAGE_DAYS, MATERNITY_NORMAL_DAYS,
    MATERNITY_SOLO_PARENT_BONUS, MAX_ALLOCATION_DAYS, MIN_POSTNATAL_DAYS, MaternityEntitlement,
    calculate_maternity_entitlement, max_prenatal_days,
};
pub use maternity_finalization::{
    FinalizedMaternity, MaternityFinalization, clamp_allocation_days, finalize_maternity,
};
pub use paternity::{
    PATERNITY_DAYS, PATERNITY_LEGAL_BASIS, PATERNITY_WINDOW_DAYS, PaternityEntitlement,
    calculate_paternity_entitlement, is_within_paternity_window, paternity_window_end,
};
pub use submission::prepare_submission;
pub use validation::{REASON_MAX_CHARS, ValidationContext, validate};
