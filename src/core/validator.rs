use serde::Serialize;

use super::error::AllocationMismatch;
use super::money::Money;
use super::social_security::{MAX_CLAIM_AGE, MIN_CLAIM_AGE};
use super::types::{AccountKind, Allocation, AllocationState, FieldState, PlanInput};

const DEFAULT_PRE_TAX_PERCENT: i64 = 30;
const DEFAULT_ROTH_PERCENT: i64 = 30;

pub fn validate_allocation(
    total: Money,
    pre_tax: Money,
    roth: Money,
    post_tax: Money,
) -> Result<(), AllocationMismatch> {
    let actual = pre_tax + roth + post_tax;
    if actual == total {
        Ok(())
    } else {
        Err(AllocationMismatch {
            expected: total,
            actual,
        })
    }
}

/// 30% pre-tax / 30% Roth / 40% post-tax. The first two are rounded down to whole
/// currency units and post-tax absorbs the remainder, so the parts always sum to
/// `total` and none goes negative.
pub fn default_split(total: Money) -> Allocation {
    let pre_tax = whole_units_share(total, DEFAULT_PRE_TAX_PERCENT);
    let roth = whole_units_share(total, DEFAULT_ROTH_PERCENT);
    Allocation::new(pre_tax, roth, total - pre_tax - roth)
}

/// The explicit "reset to default split" action.
pub fn repair(total: Money) -> Allocation {
    default_split(total)
}

fn whole_units_share(total: Money, percent: i64) -> Money {
    let share_cents = total.non_negative().cents() as i128 * percent as i128;
    Money::from_dollars((share_cents / 10_000) as i64)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    AllocationMismatch,
    AgeOrder,
    ClaimAgeOutOfRange,
    NegativeAmount,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Money>,
}

impl ValidationIssue {
    fn new(kind: IssueKind, field: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.to_string(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }
}

impl From<AllocationMismatch> for ValidationIssue {
    fn from(mismatch: AllocationMismatch) -> Self {
        Self {
            kind: IssueKind::AllocationMismatch,
            field: "allocation".to_string(),
            message: format!(
                "Allocation adds up to {} but total savings is {}",
                mismatch.actual, mismatch.expected
            ),
            expected: Some(mismatch.expected),
            actual: Some(mismatch.actual),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn allocation_mismatch(&self) -> Option<AllocationMismatch> {
        self.issues
            .iter()
            .find(|issue| issue.kind == IssueKind::AllocationMismatch)
            .and_then(|issue| {
                Some(AllocationMismatch {
                    expected: issue.expected?,
                    actual: issue.actual?,
                })
            })
    }
}

pub fn validate(input: &PlanInput) -> ValidationResult {
    let mut issues = Vec::new();

    let allocation = input.allocation;
    if let Err(mismatch) = validate_allocation(
        input.total_savings,
        allocation.pre_tax,
        allocation.roth,
        allocation.post_tax,
    ) {
        issues.push(mismatch.into());
    }

    if input.retirement_age < input.current_age {
        issues.push(ValidationIssue::new(
            IssueKind::AgeOrder,
            "retirementAge",
            "Retirement age must be at least the current age",
        ));
    }

    if input.life_expectancy < input.current_age {
        issues.push(ValidationIssue::new(
            IssueKind::AgeOrder,
            "lifeExpectancy",
            "Life expectancy must be at least the current age",
        ));
    }

    if !(MIN_CLAIM_AGE..=MAX_CLAIM_AGE).contains(&input.social_security_claim_age) {
        issues.push(ValidationIssue::new(
            IssueKind::ClaimAgeOutOfRange,
            "socialSecurityClaimAge",
            format!("Social Security can be claimed between ages {MIN_CLAIM_AGE} and {MAX_CLAIM_AGE}"),
        ));
    }

    for (field, amount) in [
        ("annualPreTaxIncome", input.annual_pre_tax_income),
        ("annualExpenses", input.annual_expenses),
        ("totalSavings", input.total_savings),
        ("allocation.preTax", allocation.pre_tax),
        ("allocation.roth", allocation.roth),
        ("allocation.postTax", allocation.post_tax),
        ("socialSecurityMonthlyEstimate", input.social_security_monthly_estimate),
    ] {
        if amount.is_negative() {
            issues.push(ValidationIssue::new(
                IssueKind::NegativeAmount,
                field,
                "Amount cannot be negative",
            ));
        }
    }

    ValidationResult {
        valid: issues.is_empty(),
        issues,
    }
}

/// Wizard-side allocation editor. Auto-fills from the total until any field is
/// edited by hand, and blocks advancing while the parts do not sum to the total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocationDraft {
    total: Money,
    values: Allocation,
    states: AllocationState,
}

impl AllocationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn values(&self) -> Allocation {
        self.values
    }

    pub fn states(&self) -> AllocationState {
        self.states
    }

    pub fn set_total(&mut self, total: Money) {
        self.total = total;
        if !self.states.any_manual() {
            self.values = default_split(total);
            self.states = AllocationState::AUTO;
        }
    }

    pub fn edit(&mut self, account: AccountKind, value: Money) {
        *self.values.get_mut(account) = value;
        self.states.set(account, FieldState::Manual);
    }

    pub fn repair(&mut self) {
        self.values = repair(self.total);
        self.states = AllocationState::AUTO;
    }

    pub fn check(&self) -> Result<(), AllocationMismatch> {
        validate_allocation(
            self.total,
            self.values.pre_tax,
            self.values.roth,
            self.values.post_tax,
        )
    }

    pub fn can_advance(&self) -> bool {
        self.check().is_ok()
    }

    pub fn into_parts(self) -> (Money, Allocation, AllocationState) {
        (self.total, self.values, self.states)
    }
}
