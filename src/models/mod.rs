//! Core data models for the Leave Entitlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod computation;
mod leave_credit;
mod leave_request;
mod leave_type;
mod payload;

pub use audit::AuditStep;
pub use computation::{LeaveComputation, LeaveField, ValidationErrors};
pub use leave_credit::LeaveCredit;
pub use leave_request::{LeaveRequestInput, SupportingDocuments};
pub use leave_type::{Gender, LeaveType, MaternityType};
pub use payload::{LeavePayload, MaternityDetails, PaternityDetails};
