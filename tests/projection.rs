use chrono::NaiveDate;
use retire::core::{
    AccountKind, AllocationDraft, AllocationState, FilingStatus, Money, PlanError, PlanInput,
    ProjectionSession, StateCode, TweakParameters, WithdrawalPolicy, annual_healthcare_cost,
    calculate, default_split, project, repair, summarize, validate_allocation,
};

fn dollars(d: i64) -> Money {
    Money::from_dollars(d)
}

fn wizard_input() -> PlanInput {
    let mut draft = AllocationDraft::new();
    draft.set_total(dollars(100_000));
    let (total_savings, allocation, allocation_state) = draft.into_parts();

    PlanInput {
        as_of: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
        target_retirement_date: NaiveDate::from_ymd_opt(2060, 3, 1).expect("valid date"),
        current_age: 30,
        retirement_age: 65,
        life_expectancy: 90,
        filing_status: FilingStatus::HeadOfHousehold,
        state: StateCode::CA,
        annual_pre_tax_income: dollars(100_000),
        annual_expenses: dollars(50_000),
        total_savings,
        allocation,
        allocation_state,
        social_security_claim_age: 67,
        social_security_monthly_estimate: dollars(2_500),
    }
}

#[test]
fn head_of_household_plan_from_wizard_defaults() {
    let input = wizard_input();
    assert_eq!(input.allocation, default_split(dollars(100_000)));
    assert_eq!(input.allocation_state, AllocationState::AUTO);

    let projection = calculate(&input, &TweakParameters::default()).expect("valid plan");
    assert_eq!(projection.snapshots.len(), 61);

    let first = &projection.snapshots[0];
    assert_eq!(first.age, 30);
    assert_eq!(first.calendar_year, 2025);
    assert!(!first.is_retired);
    assert_eq!(first.gross_income, dollars(100_000));
    assert_eq!(first.expenses, dollars(50_000));

    let claim_year = projection
        .snapshots
        .iter()
        .find(|s| s.age == 67)
        .expect("claim year present");
    assert_eq!(claim_year.social_security_income, dollars(30_000));
}

#[test]
fn healthcare_costs_drop_when_medicare_starts() {
    let input = wizard_input();
    let snapshots = project(&input, &TweakParameters::default());

    let at = |age: u32| snapshots.iter().find(|s| s.age == age).expect("age in horizon");
    assert_eq!(at(30).healthcare, annual_healthcare_cost(30, StateCode::CA, 0, 5.0));
    assert_eq!(at(65).healthcare, annual_healthcare_cost(65, StateCode::CA, 35, 5.0));
    assert!(at(64).healthcare > at(65).healthcare);
    assert!(at(66).healthcare > at(65).healthcare);
}

#[test]
fn tweaking_never_mutates_the_plan_and_reruns_are_identical() {
    let input = wizard_input();
    let before = input.clone();

    let base = calculate(&input, &TweakParameters::default()).expect("valid plan");
    let tweak = TweakParameters {
        tweak_mode: true,
        safe_withdrawal_rate_percent: 5.0,
        ..TweakParameters::default()
    };
    let tweaked = calculate(&input, &tweak).expect("valid plan");

    assert_eq!(input, before);
    assert_eq!(tweaked.summary.safe_withdrawal_label, "Safe Withdrawal (5.0%)");
    assert_eq!(
        tweaked.summary.safe_withdrawal_amount,
        tweaked.summary.net_worth_at_retirement.scale(0.05)
    );
    assert_eq!(calculate(&input, &TweakParameters::default()).expect("valid plan"), base);
}

#[test]
fn manual_mismatch_blocks_calculation_until_repaired() {
    let mut input = wizard_input();
    input.allocation.pre_tax = dollars(50_000);

    let err = calculate(&input, &TweakParameters::default()).expect_err("mismatch");
    assert!(matches!(
        err,
        PlanError::AllocationMismatch(m) if m.expected == dollars(100_000) && m.actual == dollars(120_000)
    ));

    input.allocation = repair(input.total_savings);
    let a = input.allocation;
    assert!(validate_allocation(input.total_savings, a.pre_tax, a.roth, a.post_tax).is_ok());
    assert!(calculate(&input, &TweakParameters::default()).is_ok());
}

#[test]
fn every_policy_produces_a_full_horizon() {
    let input = wizard_input();
    for policy in [
        WithdrawalPolicy::TaxableFirst,
        WithdrawalPolicy::Proportional,
        WithdrawalPolicy::Custom([AccountKind::Roth, AccountKind::PreTax, AccountKind::PostTax]),
    ] {
        let tweak = TweakParameters {
            withdrawal_policy: policy,
            ..TweakParameters::default()
        };
        let snapshots = project(&input, &tweak);
        assert_eq!(snapshots.len(), 61);
        let summary = summarize(&snapshots, &input, &tweak);
        assert_eq!(summary.final_net_worth, snapshots[60].total_net_worth);
    }
}

#[test]
fn session_keeps_the_newest_request() {
    let input = wizard_input();
    let session = ProjectionSession::new();

    let older = session.begin();
    let newer = session.begin();
    let tweaked = TweakParameters {
        tax_bracket_inflation_percent: 0.0,
        ..TweakParameters::default()
    };

    let newer_result = calculate(&input, &tweaked).expect("valid plan");
    let older_result = calculate(&input, &TweakParameters::default()).expect("valid plan");

    assert!(session.publish(newer, newer_result.clone()));
    assert!(!session.publish(older, older_result));
    let (stamp, latest) = session.latest().expect("published");
    assert_eq!(stamp, newer.stamp());
    assert_eq!(*latest, newer_result);
}
