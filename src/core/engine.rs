use tracing::debug;

use super::error::PlanError;
use super::healthcare;
use super::money::{Money, compound_factor};
use super::social_security::annual_benefit;
use super::tax::TaxModel;
use super::types::{
    Allocation, PlanInput, Projection, ProjectionSummary, TweakParameters, YearSnapshot,
    safe_withdrawal_label,
};
use super::validator::validate;
use super::withdrawal::{WithdrawalOutcome, WithdrawalStrategy, strategy_for};

/// Deterministic year-by-year projection. Holds only the tax tables; every
/// run starts from the plan input.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProjectionEngine {
    tax: TaxModel,
}

struct YearContext<'a> {
    input: &'a PlanInput,
    tweak: &'a TweakParameters,
    year_index: u32,
    age: u32,
    expenses: Money,
    healthcare: Money,
    social_security: Money,
}

impl YearContext<'_> {
    /// Everything the year's spendable income has to cover.
    fn spending(&self) -> Money {
        self.expenses + self.healthcare
    }
}

#[derive(Debug, Default)]
struct YearFlows {
    gross_income: Money,
    tax_owed: Money,
    withdrawals: Allocation,
    withdrawal_target: Money,
    shortfall: Money,
}

#[derive(Debug)]
struct WithdrawalAttempt {
    outcome: WithdrawalOutcome,
    tax: Money,
    spendable: Money,
}

impl ProjectionEngine {
    pub const fn new(tax: TaxModel) -> Self {
        Self { tax }
    }

    pub fn project(&self, input: &PlanInput, tweak: &TweakParameters) -> Vec<YearSnapshot> {
        let Some(horizon) = input.horizon_years() else {
            return Vec::new();
        };

        let strategy = strategy_for(&tweak.withdrawal_policy);
        let start_year = input.start_year();
        let mut balances = input.allocation;
        let mut swr_override = tweak.swr_override_percent();
        let mut snapshots = Vec::with_capacity(horizon as usize + 1);

        for year_index in 0..=horizon {
            let age = input.current_age + year_index;
            let price_index = compound_factor(tweak.inflation_percent, year_index);
            let ctx = YearContext {
                input,
                tweak,
                year_index,
                age,
                expenses: input.annual_expenses.scale(price_index),
                healthcare: if tweak.healthcare_costs {
                    healthcare::annual_cost(age, input.state, year_index, tweak.healthcare_inflation_percent)
                } else {
                    Money::ZERO
                },
                social_security: annual_benefit(
                    age,
                    input.social_security_claim_age,
                    input.social_security_monthly_estimate,
                    tweak.social_security_cola_percent,
                ),
            };

            let is_retired = age >= input.retirement_age;
            let flows = if is_retired {
                let target = swr_override
                    .take()
                    .map(|rate| safe_withdrawal_amount(balances.total(), rate));
                self.run_retirement_year(&ctx, strategy.as_ref(), &mut balances, target)
            } else {
                self.run_working_year(&ctx, &mut balances, price_index)
            };

            apply_growth(&mut balances, tweak.investment_return_percent);

            snapshots.push(YearSnapshot {
                age,
                calendar_year: start_year + year_index as i32,
                is_retired,
                gross_income: flows.gross_income,
                tax_owed: flows.tax_owed,
                social_security_income: ctx.social_security,
                withdrawal_from_pre_tax: flows.withdrawals.pre_tax,
                withdrawal_from_roth: flows.withdrawals.roth,
                withdrawal_from_post_tax: flows.withdrawals.post_tax,
                withdrawal_target: flows.withdrawal_target,
                expenses: ctx.expenses,
                healthcare: ctx.healthcare,
                shortfall: flows.shortfall,
                ending_balance_pre_tax: balances.pre_tax,
                ending_balance_roth: balances.roth,
                ending_balance_post_tax: balances.post_tax,
                total_net_worth: balances.total(),
            });
        }

        debug!(
            target: "retire::engine",
            years = snapshots.len(),
            policy = strategy.name(),
            final_net_worth = %snapshots.last().map_or(Money::ZERO, |s| s.total_net_worth),
            "projection complete"
        );
        snapshots
    }

    fn run_working_year(&self, ctx: &YearContext<'_>, balances: &mut Allocation, price_index: f64) -> YearFlows {
        let input = ctx.input;
        let pct = ctx.tweak.tax_bracket_inflation_percent;
        let wages = input.annual_pre_tax_income.scale(price_index);

        let taxable_ss = self
            .tax
            .taxable_social_security(wages, ctx.social_security, input.filing_status);
        let tax_owed = self.tax.compute_tax(
            wages + taxable_ss,
            input.filing_status,
            input.state,
            ctx.year_index,
            pct,
        ) + self.tax.payroll_tax(wages, ctx.year_index, pct);

        balances.post_tax += wages + ctx.social_security - ctx.spending() - tax_owed;

        YearFlows {
            gross_income: wages + ctx.social_security,
            tax_owed,
            ..YearFlows::default()
        }
    }

    fn run_retirement_year(
        &self,
        ctx: &YearContext<'_>,
        strategy: &dyn WithdrawalStrategy,
        balances: &mut Allocation,
        swr_target: Option<Money>,
    ) -> YearFlows {
        let (target, gross) = match swr_target {
            Some(target) => (target, target.min(withdrawable(*balances))),
            None => {
                let gross = self.gross_withdrawal_for_need(ctx, strategy, *balances);
                (gross, gross)
            }
        };

        let attempt = self.attempt_withdrawal(ctx, strategy, *balances, gross);
        *balances = attempt.outcome.balances;

        let shortfall = (ctx.spending() - attempt.spendable).non_negative();
        if shortfall.is_positive() {
            // Unfunded spending is carried as debt in the post-tax account.
            balances.post_tax -= shortfall;
        } else if swr_target.is_none() {
            balances.post_tax += attempt.spendable - ctx.spending();
        }

        let withdrawals = attempt.outcome.amounts;
        YearFlows {
            gross_income: ctx.social_security + withdrawals.total(),
            tax_owed: attempt.tax,
            withdrawals,
            withdrawal_target: target,
            shortfall,
        }
    }

    /// Smallest gross withdrawal whose after-tax proceeds, together with Social
    /// Security, cover the year's spending. Capped at what the accounts hold.
    fn gross_withdrawal_for_need(
        &self,
        ctx: &YearContext<'_>,
        strategy: &dyn WithdrawalStrategy,
        balances: Allocation,
    ) -> Money {
        let covers = |gross: Money| {
            self.attempt_withdrawal(ctx, strategy, balances, gross).spendable >= ctx.spending()
        };

        if covers(Money::ZERO) {
            return Money::ZERO;
        }
        let available = withdrawable(balances);
        if !covers(available) {
            return available;
        }

        let mut lo = 0i64;
        let mut hi = available.cents();
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if covers(Money::from_cents(mid)) {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        Money::from_cents(hi)
    }

    fn attempt_withdrawal(
        &self,
        ctx: &YearContext<'_>,
        strategy: &dyn WithdrawalStrategy,
        balances: Allocation,
        gross: Money,
    ) -> WithdrawalAttempt {
        let outcome = strategy.withdraw(gross, balances);
        let tax = self.retirement_tax(ctx, outcome.amounts.pre_tax);
        let spendable = ctx.social_security + outcome.amounts.total() - tax;
        WithdrawalAttempt {
            outcome,
            tax,
            spendable,
        }
    }

    /// Pre-tax withdrawals are ordinary income; Social Security is taxed
    /// on top of them under the provisional-income rule.
    fn retirement_tax(&self, ctx: &YearContext<'_>, pre_tax_withdrawal: Money) -> Money {
        let input = ctx.input;
        let taxable_ss =
            self.tax
                .taxable_social_security(pre_tax_withdrawal, ctx.social_security, input.filing_status);
        self.tax.compute_tax(
            pre_tax_withdrawal + taxable_ss,
            input.filing_status,
            input.state,
            ctx.year_index,
            ctx.tweak.tax_bracket_inflation_percent,
        ) + self.tax.early_withdrawal_penalty(pre_tax_withdrawal, ctx.age)
    }
}

pub fn project(input: &PlanInput, tweak: &TweakParameters) -> Vec<YearSnapshot> {
    ProjectionEngine::default().project(input, tweak)
}

pub fn safe_withdrawal_amount(net_worth: Money, rate_percent: f64) -> Money {
    net_worth.non_negative().scale(rate_percent / 100.0)
}

pub fn summarize(
    snapshots: &[YearSnapshot],
    input: &PlanInput,
    tweak: &TweakParameters,
) -> ProjectionSummary {
    let starting_net_worth = input.allocation.total();
    let net_worth_at_retirement = snapshots
        .iter()
        .take_while(|s| !s.is_retired)
        .last()
        .map_or(starting_net_worth, |s| s.total_net_worth);
    let depletion_age = snapshots
        .iter()
        .find(|s| s.shortfall.is_positive() || s.total_net_worth.is_negative())
        .map(|s| s.age);
    let rate = tweak.safe_withdrawal_rate_percent;

    ProjectionSummary {
        is_solvent: depletion_age.is_none(),
        depletion_age,
        final_net_worth: snapshots.last().map_or(starting_net_worth, |s| s.total_net_worth),
        net_worth_at_retirement,
        safe_withdrawal_rate_percent: rate,
        safe_withdrawal_amount: safe_withdrawal_amount(net_worth_at_retirement, rate),
        safe_withdrawal_label: safe_withdrawal_label(rate),
    }
}

/// Validate, project, summarise.
pub fn calculate(input: &PlanInput, tweak: &TweakParameters) -> Result<Projection, PlanError> {
    let validation = validate(input);
    if !validation.valid {
        if let (Some(mismatch), 1) = (validation.allocation_mismatch(), validation.issues.len()) {
            return Err(mismatch.into());
        }
        return Err(PlanError::InvalidInput(validation.issues));
    }

    let snapshots = project(input, tweak);
    let summary = summarize(&snapshots, input, tweak);
    debug!(
        target: "retire::engine",
        solvent = summary.is_solvent,
        depletion_age = ?summary.depletion_age,
        "plan calculated"
    );
    Ok(Projection { snapshots, summary })
}

fn withdrawable(balances: Allocation) -> Money {
    balances.pre_tax.non_negative() + balances.roth.non_negative() + balances.post_tax.non_negative()
}

fn apply_growth(balances: &mut Allocation, return_percent: f64) {
    let factor = 1.0 + return_percent / 100.0;
    for balance in [&mut balances.pre_tax, &mut balances.roth, &mut balances.post_tax] {
        if balance.is_positive() {
            *balance = balance.scale(factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AllocationState, FilingStatus, StateCode, WithdrawalPolicy};
    use crate::core::validator::default_split;
    use chrono::NaiveDate;
    use proptest::prelude::{prop_assert_eq, proptest};

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    fn sample_input() -> PlanInput {
        PlanInput {
            as_of: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            target_retirement_date: NaiveDate::from_ymd_opt(2060, 1, 1).expect("valid date"),
            current_age: 30,
            retirement_age: 65,
            life_expectancy: 90,
            filing_status: FilingStatus::HeadOfHousehold,
            state: StateCode::TX,
            annual_pre_tax_income: dollars(100_000),
            annual_expenses: dollars(50_000),
            total_savings: dollars(100_000),
            allocation: default_split(dollars(100_000)),
            allocation_state: AllocationState::AUTO,
            social_security_claim_age: 67,
            social_security_monthly_estimate: dollars(2_000),
        }
    }

    fn flat_tweak() -> TweakParameters {
        TweakParameters {
            inflation_percent: 0.0,
            investment_return_percent: 0.0,
            social_security_cola_percent: 0.0,
            tax_bracket_inflation_percent: 0.0,
            healthcare_costs: false,
            ..TweakParameters::default()
        }
    }

    /// Already retired at 70 in a no-tax state with only post-tax money.
    fn retired_post_tax_only(savings: i64, expenses: i64) -> PlanInput {
        let mut input = sample_input();
        input.current_age = 70;
        input.retirement_age = 70;
        input.life_expectancy = 72;
        input.social_security_monthly_estimate = Money::ZERO;
        input.annual_expenses = dollars(expenses);
        input.total_savings = dollars(savings);
        input.allocation = Allocation::new(Money::ZERO, Money::ZERO, dollars(savings));
        input
    }

    #[test]
    fn project_is_pure() {
        let input = sample_input();
        let tweak = TweakParameters::default();
        assert_eq!(project(&input, &tweak), project(&input, &tweak));
    }

    #[test]
    fn horizon_covers_every_year_through_life_expectancy() {
        let input = sample_input();
        let snapshots = project(&input, &TweakParameters::default());
        assert_eq!(snapshots.len(), 61);
        assert_eq!(snapshots[0].age, 30);
        assert_eq!(snapshots[60].age, 90);
        assert!(snapshots.windows(2).all(|w| w[1].calendar_year == w[0].calendar_year + 1));
    }

    #[test]
    fn degenerate_horizons() {
        let mut input = sample_input();
        input.life_expectancy = 29;
        assert!(project(&input, &TweakParameters::default()).is_empty());

        input.life_expectancy = 30;
        assert_eq!(project(&input, &TweakParameters::default()).len(), 1);
    }

    #[test]
    fn calendar_years_start_at_the_plan_date() {
        let snapshots = project(&sample_input(), &TweakParameters::default());
        assert_eq!(snapshots[0].calendar_year, 2025);
        let retirement = snapshots.iter().find(|s| s.is_retired).expect("retires");
        assert_eq!(retirement.age, 65);
        assert_eq!(retirement.calendar_year, 2060);
    }

    #[test]
    fn working_year_saves_surplus_to_post_tax() {
        let input = sample_input();
        let tweak = flat_tweak();
        let first = project(&input, &tweak)[0];

        assert!(!first.is_retired);
        assert_eq!(first.total_withdrawal(), Money::ZERO);
        let expected_tax = TaxModel::default().compute_tax(
            dollars(100_000),
            FilingStatus::HeadOfHousehold,
            StateCode::TX,
            0,
            0.0,
        ) + dollars(7_650);
        assert_eq!(first.tax_owed, expected_tax);
        assert_eq!(
            first.ending_balance_post_tax,
            dollars(40_000) + dollars(100_000) - dollars(50_000) - expected_tax
        );
        assert_eq!(first.ending_balance_pre_tax, dollars(30_000));
    }

    #[test]
    fn retirement_draws_post_tax_first_and_leaves_others_untouched() {
        let mut input = retired_post_tax_only(0, 20_000);
        input.allocation = Allocation::new(dollars(50_000), dollars(50_000), dollars(50_000));
        input.total_savings = dollars(150_000);

        let first = project(&input, &flat_tweak())[0];
        assert_eq!(first.withdrawal_from_post_tax, dollars(20_000));
        assert_eq!(first.withdrawal_from_pre_tax, Money::ZERO);
        assert_eq!(first.withdrawal_from_roth, Money::ZERO);
        assert_eq!(first.tax_owed, Money::ZERO);
        assert_eq!(first.ending_balance_pre_tax, dollars(50_000));
        assert_eq!(first.ending_balance_roth, dollars(50_000));
        assert_eq!(first.ending_balance_post_tax, dollars(30_000));
    }

    #[test]
    fn pre_tax_withdrawals_are_grossed_up_for_tax() {
        let mut input = retired_post_tax_only(0, 40_000);
        input.allocation = Allocation::new(dollars(500_000), Money::ZERO, Money::ZERO);
        input.total_savings = dollars(500_000);

        let first = project(&input, &flat_tweak())[0];
        assert!(first.withdrawal_from_pre_tax > dollars(40_000));
        assert_eq!(first.withdrawal_from_pre_tax - first.tax_owed, dollars(40_000));
        assert_eq!(first.shortfall, Money::ZERO);
    }

    #[test]
    fn social_security_surplus_is_saved() {
        let mut input = retired_post_tax_only(10_000, 12_000);
        input.social_security_monthly_estimate = dollars(1_000);
        input.social_security_claim_age = 70;

        let first = project(&input, &flat_tweak())[0];
        // 1,000 * 124% * 12 = 14,880, fully under the provisional-income threshold
        assert_eq!(first.social_security_income, dollars(14_880));
        assert_eq!(first.total_withdrawal(), Money::ZERO);
        assert_eq!(first.ending_balance_post_tax, dollars(10_000 + 2_880));
    }

    #[test]
    fn depletion_shows_as_negative_net_worth() {
        let input = retired_post_tax_only(30_000, 20_000);
        let snapshots = project(&input, &flat_tweak());

        assert_eq!(snapshots[0].total_net_worth, dollars(10_000));
        assert_eq!(snapshots[1].withdrawal_from_post_tax, dollars(10_000));
        assert_eq!(snapshots[1].shortfall, dollars(10_000));
        assert_eq!(snapshots[1].total_net_worth, dollars(-10_000));
        assert_eq!(snapshots[2].shortfall, dollars(20_000));
        assert_eq!(snapshots[2].total_net_worth, dollars(-30_000));

        let summary = summarize(&snapshots, &input, &flat_tweak());
        assert!(!summary.is_solvent);
        assert_eq!(summary.depletion_age, Some(71));
    }

    #[test]
    fn growth_skips_negative_balances() {
        let input = retired_post_tax_only(30_000, 20_000);
        let tweak = TweakParameters {
            investment_return_percent: 10.0,
            ..flat_tweak()
        };
        let snapshots = project(&input, &tweak);
        assert_eq!(snapshots[0].ending_balance_post_tax, dollars(11_000));
        assert_eq!(snapshots[1].ending_balance_post_tax, dollars(-9_000));
        assert_eq!(snapshots[2].ending_balance_post_tax, dollars(-29_000));
    }

    #[test]
    fn swr_override_sets_first_retirement_year_target() {
        let input = sample_input();
        let tweak = TweakParameters {
            tweak_mode: true,
            safe_withdrawal_rate_percent: 5.0,
            ..TweakParameters::default()
        };
        let snapshots = project(&input, &tweak);
        let summary = summarize(&snapshots, &input, &tweak);

        let last_working = snapshots.iter().filter(|s| !s.is_retired).last().expect("works first");
        let net_worth = last_working.total_net_worth;
        assert_eq!(summary.net_worth_at_retirement, net_worth);

        let first_retired = snapshots.iter().find(|s| s.is_retired).expect("retires");
        let expected = net_worth.scale(0.05);
        assert_eq!(first_retired.withdrawal_target, expected);
        assert_eq!(first_retired.total_withdrawal(), expected);
        assert_eq!(summary.safe_withdrawal_amount, expected);
        assert_eq!(summary.safe_withdrawal_label, "Safe Withdrawal (5.0%)");
    }

    #[test]
    fn low_swr_caps_the_first_retirement_withdrawal() {
        let input = retired_post_tax_only(2_000_000, 50_000);
        let tweak = TweakParameters {
            tweak_mode: true,
            safe_withdrawal_rate_percent: 1.0,
            ..flat_tweak()
        };
        let snapshots = project(&input, &tweak);

        assert_eq!(snapshots[0].withdrawal_target, dollars(20_000));
        assert_eq!(snapshots[0].total_withdrawal(), dollars(20_000));
        assert_eq!(snapshots[0].shortfall, dollars(30_000));
        assert_eq!(snapshots[0].total_net_worth, dollars(1_950_000));

        // Later years go back to covering expenses.
        assert_eq!(snapshots[1].total_withdrawal(), dollars(50_000));
        assert_eq!(snapshots[1].shortfall, Money::ZERO);
        assert_eq!(summarize(&snapshots, &input, &tweak).depletion_age, Some(70));
    }

    #[test]
    fn high_swr_withdrawal_above_expenses_is_spent() {
        let input = retired_post_tax_only(2_000_000, 50_000);
        let tweak = TweakParameters {
            tweak_mode: true,
            safe_withdrawal_rate_percent: 5.0,
            ..flat_tweak()
        };
        let first = project(&input, &tweak)[0];
        assert_eq!(first.total_withdrawal(), dollars(100_000));
        assert_eq!(first.shortfall, Money::ZERO);
        assert_eq!(first.total_net_worth, dollars(1_900_000));
    }

    #[test]
    fn healthcare_switches_to_medicare_at_sixty_five() {
        let mut input = retired_post_tax_only(500_000, 30_000);
        input.current_age = 64;
        input.retirement_age = 64;
        input.life_expectancy = 65;
        let tweak = TweakParameters {
            healthcare_costs: true,
            healthcare_inflation_percent: 0.0,
            ..flat_tweak()
        };
        let snapshots = project(&input, &tweak);

        assert_eq!(snapshots[0].healthcare, dollars(9_800).mul_ratio(10_500, 10_000));
        assert_eq!(snapshots[1].healthcare, dollars(7_000));
        assert_eq!(snapshots[0].withdrawal_from_post_tax, dollars(30_000 + 10_290));
        assert_eq!(snapshots[1].withdrawal_from_post_tax, dollars(37_000));
        assert_eq!(snapshots[1].expenses, dollars(30_000));
    }

    #[test]
    fn healthcare_is_paid_from_wages_while_working() {
        let mut input = sample_input();
        input.social_security_monthly_estimate = Money::ZERO;
        let with_costs = TweakParameters {
            healthcare_costs: true,
            ..flat_tweak()
        };
        let first = project(&input, &with_costs)[0];
        let without = project(&input, &flat_tweak())[0];

        assert_eq!(first.healthcare, healthcare::annual_cost(30, StateCode::TX, 0, 5.0));
        assert_eq!(
            without.ending_balance_post_tax - first.ending_balance_post_tax,
            first.healthcare
        );
    }

    #[test]
    fn oversized_balances_saturate_instead_of_panicking() {
        let mut input = retired_post_tax_only(0, 50_000);
        input.current_age = 30;
        input.retirement_age = 31;
        input.life_expectancy = 34;
        input.annual_pre_tax_income = Money::from_cents(i64::MAX);
        input.total_savings = Money::from_cents(i64::MAX);
        input.allocation = Allocation::new(Money::ZERO, Money::ZERO, Money::from_cents(i64::MAX));

        let snapshots = project(&input, &TweakParameters::default());
        assert_eq!(snapshots.len(), 5);
        assert!(snapshots.iter().all(|s| s.total_net_worth.is_positive()));
    }

    #[test]
    fn swr_is_ignored_outside_tweak_mode() {
        let input = sample_input();
        let base = project(&input, &TweakParameters::default());
        let moved = project(
            &input,
            &TweakParameters {
                safe_withdrawal_rate_percent: 9.0,
                ..TweakParameters::default()
            },
        );
        assert_eq!(base, moved);
    }

    #[test]
    fn calculate_rejects_allocation_mismatch() {
        let mut input = sample_input();
        input.allocation.pre_tax = dollars(50_000);
        match calculate(&input, &TweakParameters::default()) {
            Err(PlanError::AllocationMismatch(m)) => {
                assert_eq!(m.expected, dollars(100_000));
                assert_eq!(m.actual, dollars(120_000));
            }
            other => panic!("expected allocation mismatch, got {other:?}"),
        }
    }

    #[test]
    fn calculate_collects_multiple_issues() {
        let mut input = sample_input();
        input.allocation.pre_tax = dollars(50_000);
        input.social_security_claim_age = 61;
        assert!(matches!(
            calculate(&input, &TweakParameters::default()),
            Err(PlanError::InvalidInput(issues)) if issues.len() == 2
        ));
    }

    #[test]
    fn head_of_household_end_to_end() {
        let input = sample_input();
        let projection = calculate(&input, &TweakParameters::default()).expect("valid plan");
        let first = projection.snapshots.first().expect("non-empty");
        assert_eq!(first.age, 30);
        assert!(!first.is_retired);
        assert!(first.tax_owed.is_positive());
        assert!(first.total_net_worth > dollars(100_000));
        assert_eq!(projection.summary.safe_withdrawal_label, "Safe Withdrawal (4.0%)");
    }

    #[test]
    fn withdrawal_policy_changes_account_mix() {
        let mut input = retired_post_tax_only(0, 20_000);
        input.allocation = Allocation::new(dollars(50_000), dollars(50_000), dollars(100_000));
        input.total_savings = dollars(200_000);
        let tweak = TweakParameters {
            withdrawal_policy: WithdrawalPolicy::Proportional,
            ..flat_tweak()
        };
        let first = project(&input, &tweak)[0];
        assert!(first.withdrawal_from_pre_tax.is_positive());
        assert!(first.withdrawal_from_roth.is_positive());
        assert!(first.withdrawal_from_post_tax.is_positive());
    }

    proptest! {
        #[test]
        fn prop_horizon_length(current_age in 18u32..80, extra in 0u32..40, retire_offset in 0u32..30) {
            let mut input = sample_input();
            input.current_age = current_age;
            input.retirement_age = current_age + retire_offset;
            input.life_expectancy = current_age + extra;
            let snapshots = project(&input, &TweakParameters::default());
            prop_assert_eq!(snapshots.len() as u32, extra + 1);
        }
    }
}
