mod engine;
mod error;
mod healthcare;
mod money;
mod session;
mod social_security;
mod solver;
mod tax;
mod tax_tables;
mod types;
mod validator;
mod withdrawal;

pub use engine::{ProjectionEngine, calculate, project, safe_withdrawal_amount, summarize};
pub use error::{AllocationMismatch, ParseEnumError, PlanError};
pub use healthcare::{MEDICARE_AGE, annual_cost as annual_healthcare_cost};
pub use money::Money;
pub use session::{ProjectionSession, RequestTicket};
pub use social_security::{
    FULL_RETIREMENT_AGE, MAX_CLAIM_AGE, MIN_CLAIM_AGE, annual_benefit, monthly_benefit,
};
pub use solver::{
    DEFAULT_MAX_RETIREMENT_AGE, RetirementAgeCandidate, RetirementAgeSolveConfig,
    RetirementAgeSolveResult, solve_retirement_age,
};
pub use tax::{TaxModel, compute_tax};
pub use tax_tables::{Bracket, FederalSchedule, StateIncomeTax, TAX_YEAR_2025, TaxTables};
pub use types::{
    AccountKind, Allocation, AllocationState, FieldState, FilingStatus, PlanInput, Projection,
    ProjectionSummary, StateCode, TweakParameters, WithdrawalPolicy, YearSnapshot,
    retirement_age_for_date, safe_withdrawal_label,
};
pub use validator::{
    AllocationDraft, IssueKind, ValidationIssue, ValidationResult, default_split, repair, validate,
    validate_allocation,
};
pub use withdrawal::{
    Proportional, Sequential, TAXABLE_FIRST_ORDER, WithdrawalOutcome, WithdrawalStrategy,
    strategy_for,
};
