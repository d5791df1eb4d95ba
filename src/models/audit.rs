//! Audit step model.
//!
//! Every entitlement rule records an [`AuditStep`] so that HR can see which
//! statutory provision produced a day count.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use leave_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "paternity_entitlement".to_string(),
///     rule_name: "Paternity Entitlement".to_string(),
///     legal_basis: "RA 8187".to_string(),
///     input: serde_json::json!({ "date_from": "2024-05-02" }),
///     output: serde_json::json!({ "days": 7 }),
///     reasoning: "Paternity leave is a flat 7 days".to_string(),
/// };
/// assert_eq!(step.output["days"], 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Statute or policy the rule implements.
    pub legal_basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
