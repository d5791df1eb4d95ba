//! Configuration types for the leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{Gender, LeaveType};

/// Metadata about the leave policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Short policy code (e.g., "PH-LEAVE").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// URL to the governing statute or policy document.
    pub source_url: String,
}

/// A leave type as described in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypeDefinition {
    /// Label shown to employees.
    pub label: String,
    /// Restricts the leave type to applicants of this gender.
    #[serde(default)]
    pub eligible_gender: Option<Gender>,
    /// Whether the leave type has its own yearly leave credits.
    #[serde(default)]
    pub credit_tracked: bool,
    /// Charges another leave type's credits instead of its own.
    #[serde(default)]
    pub draws_from: Option<LeaveType>,
    /// Days of notice required before the start date; zero for none.
    #[serde(default)]
    pub notice_days: u32,
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave type code to definition.
    pub leave_types: HashMap<String, LeaveTypeDefinition>,
}

/// Credit allocation file structure, keyed by leave type code.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditAllocationConfig {
    /// The first year these allocations apply to.
    pub year: i32,
    /// Map of leave type code to yearly credits (0 = unlimited).
    pub credits: HashMap<String, u32>,
}

/// Default yearly credits effective from a given year.
#[derive(Debug, Clone)]
pub struct CreditAllocation {
    /// The first year these allocations apply to.
    pub year: i32,
    /// Yearly credits by leave type (0 = unlimited).
    pub credits: HashMap<LeaveType, u32>,
}

/// The complete leave policy configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// Catalog of leave types.
    leave_types: HashMap<LeaveType, LeaveTypeDefinition>,
    /// Credit allocations by effective year (sorted oldest first).
    credit_allocations: Vec<CreditAllocation>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(
        metadata: PolicyMetadata,
        leave_types: HashMap<LeaveType, LeaveTypeDefinition>,
        credit_allocations: Vec<CreditAllocation>,
    ) -> Self {
        let mut sorted_allocations = credit_allocations;
        sorted_allocations.sort_by_key(|a| a.year);
        Self {
            metadata,
            leave_types,
            credit_allocations: sorted_allocations,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the leave type catalog.
    pub fn leave_types(&self) -> &HashMap<LeaveType, LeaveTypeDefinition> {
        &self.leave_types
    }

    /// Returns all credit allocations.
    pub fn credit_allocations(&self) -> &[CreditAllocation] {
        &self.credit_allocations
    }
}
