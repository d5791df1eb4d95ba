//! Leave type, maternity type and applicant gender enums.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of leave being requested.
///
/// Maternity and Paternity are policy-bound: their day count and end date are
/// derived from statutory constants rather than entered by the employee.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveType;
///
/// assert_eq!(LeaveType::Maternity.label(), "Maternity Leave");
/// assert!(LeaveType::Paternity.is_policy_bound());
/// assert!(!LeaveType::Vacation.is_policy_bound());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid vacation leave.
    Vacation,
    /// Paid sick leave.
    Sick,
    /// Emergency leave.
    Emergency,
    /// Leave without pay.
    Unpaid,
    /// Expanded maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
}

impl LeaveType {
    /// Every leave type, in the order the request form lists them.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Vacation,
        LeaveType::Sick,
        LeaveType::Emergency,
        LeaveType::Unpaid,
        LeaveType::Maternity,
        LeaveType::Paternity,
    ];

    /// Returns the configuration code for this leave type (e.g. "vacation").
    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Sick => "sick",
            LeaveType::Emergency => "emergency",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
        }
    }

    /// Returns the human-readable label shown to employees.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Emergency => "Emergency Leave",
            LeaveType::Unpaid => "Unpaid Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::Paternity => "Paternity Leave",
        }
    }

    /// Returns true when days and end date are fixed by policy.
    pub fn is_policy_bound(&self) -> bool {
        matches!(self, LeaveType::Maternity | LeaveType::Paternity)
    }

    /// Looks up a leave type by its configuration code.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::LeaveType;
    ///
    /// assert_eq!(LeaveType::from_code("sick").unwrap(), LeaveType::Sick);
    /// assert!(LeaveType::from_code("sabbatical").is_err());
    /// ```
    pub fn from_code(code: &str) -> EngineResult<Self> {
        LeaveType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                code: code.to_string(),
            })
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The kind of maternity application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaternityType {
    /// Filed before delivery, against an expected delivery date.
    #[default]
    Prenatal,
    /// Normal delivery or caesarean section.
    Normal,
    /// Miscarriage or emergency termination of pregnancy.
    Miscarriage,
}

impl MaternityType {
    /// Returns true for the types that carry the full entitlement.
    pub fn is_live_birth(&self) -> bool {
        matches!(self, MaternityType::Prenatal | MaternityType::Normal)
    }

    /// Wording used when asking for the delivery date.
    pub fn delivery_date_wording(&self) -> &'static str {
        match self {
            MaternityType::Prenatal => "expected",
            _ => "actual",
        }
    }
}

/// Gender of the applicant, used to decide which leave types are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female applicant.
    Female,
    /// Male applicant.
    Male,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_serialization_uses_codes() {
        for leave_type in LeaveType::ALL {
            assert_eq!(
                serde_json::to_string(&leave_type).unwrap(),
                format!("\"{}\"", leave_type.code())
            );
        }
    }

    #[test]
    fn test_from_code_round_trips_every_type() {
        for leave_type in LeaveType::ALL {
            assert_eq!(LeaveType::from_code(leave_type.code()).unwrap(), leave_type);
        }
    }

    #[test]
    fn test_from_code_unknown_returns_error() {
        match LeaveType::from_code("bereavement") {
            Err(EngineError::LeaveTypeNotFound { code }) => assert_eq!(code, "bereavement"),
            other => panic!("Expected LeaveTypeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(LeaveType::Emergency.to_string(), "Emergency Leave");
    }

    #[test]
    fn test_maternity_type_defaults_to_prenatal() {
        assert_eq!(MaternityType::default(), MaternityType::Prenatal);
    }

    #[test]
    fn test_delivery_date_wording() {
        assert_eq!(MaternityType::Prenatal.delivery_date_wording(), "expected");
        assert_eq!(MaternityType::Normal.delivery_date_wording(), "actual");
        assert_eq!(MaternityType::Miscarriage.delivery_date_wording(), "actual");
    }

    #[test]
    fn test_gender_deserialization() {
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
    }
}
