use thiserror::Error;

use super::money::Money;
use super::validator::ValidationIssue;

/// Allocation subtotals do not add up to the stated total savings.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("allocation does not match total savings: expected {expected}, got {actual}")]
pub struct AllocationMismatch {
    pub expected: Money,
    pub actual: Money,
}

/// An enumerated option the UI is supposed to constrain was given an unknown value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("unknown filing status: {0}")]
    FilingStatus(String),
    #[error("unknown state code: {0}")]
    State(String),
    #[error("unknown account type: {0}")]
    Account(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    AllocationMismatch(#[from] AllocationMismatch),

    #[error(transparent)]
    InvalidEnum(#[from] ParseEnumError),

    #[error("plan input is invalid: {}", summarize_issues(.0))]
    InvalidInput(Vec<ValidationIssue>),
}

fn summarize_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{FilingStatus, StateCode};

    #[test]
    fn unknown_enum_strings_surface_as_plan_errors() {
        let err: PlanError = "widowed".parse::<FilingStatus>().expect_err("unknown").into();
        assert_eq!(err.to_string(), "unknown filing status: widowed");

        let err: PlanError = "XX".parse::<StateCode>().expect_err("unknown").into();
        assert!(matches!(err, PlanError::InvalidEnum(ParseEnumError::State(code)) if code == "XX"));
    }

    #[test]
    fn mismatch_message_names_both_amounts() {
        let err = PlanError::from(AllocationMismatch {
            expected: Money::from_dollars(100_000),
            actual: Money::from_dollars(120_000),
        });
        assert_eq!(
            err.to_string(),
            "allocation does not match total savings: expected $100000.00, got $120000.00"
        );
    }
}
