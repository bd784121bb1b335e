use super::money::{Money, compound_factor, round_div};
use super::tax_tables::{Bracket, StateIncomeTax, TAX_YEAR_2025, TaxTables};
use super::types::{FilingStatus, StateCode};

const HALF_BP: u32 = 5_000;
const EIGHTY_FIVE_PERCENT_BP: u32 = 8_500;

/// Income tax for a simulated year. Thresholds from `tables` are indexed by
/// `(1 + p/100)^year_index` and rounded to cents before any band is applied.
#[derive(Copy, Clone, Debug)]
pub struct TaxModel {
    tables: &'static TaxTables,
}

impl Default for TaxModel {
    fn default() -> Self {
        Self::new(&TAX_YEAR_2025)
    }
}

impl TaxModel {
    pub const fn new(tables: &'static TaxTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'static TaxTables {
        self.tables
    }

    /// Federal plus state income tax on `income`.
    pub fn compute_tax(
        &self,
        income: Money,
        filing_status: FilingStatus,
        state: StateCode,
        year_index: u32,
        bracket_inflation_percent: f64,
    ) -> Money {
        let factor = compound_factor(bracket_inflation_percent, year_index);
        let taxable = self.taxable_income(income, filing_status, factor);
        self.federal_on_taxable(taxable, filing_status, factor) + self.state_on_taxable(taxable, state, factor)
    }

    pub fn federal_tax(
        &self,
        income: Money,
        filing_status: FilingStatus,
        year_index: u32,
        bracket_inflation_percent: f64,
    ) -> Money {
        let factor = compound_factor(bracket_inflation_percent, year_index);
        let taxable = self.taxable_income(income, filing_status, factor);
        self.federal_on_taxable(taxable, filing_status, factor)
    }

    pub fn state_tax(
        &self,
        income: Money,
        filing_status: FilingStatus,
        state: StateCode,
        year_index: u32,
        bracket_inflation_percent: f64,
    ) -> Money {
        let factor = compound_factor(bracket_inflation_percent, year_index);
        let taxable = self.taxable_income(income, filing_status, factor);
        self.state_on_taxable(taxable, state, factor)
    }

    /// Social Security tax up to the indexed wage base plus Medicare, on wages only.
    pub fn payroll_tax(&self, wages: Money, year_index: u32, bracket_inflation_percent: f64) -> Money {
        if !wages.is_positive() {
            return Money::ZERO;
        }
        let payroll = &self.tables.payroll;
        let wage_base = payroll
            .social_security_wage_base
            .scale(compound_factor(bracket_inflation_percent, year_index));
        let capped = wages.min(wage_base);

        let scaled = capped.cents() as i128 * payroll.social_security_rate_bp as i128
            + wages.cents() as i128 * payroll.medicare_rate_bp as i128;
        Money::from_cents(round_div(scaled, 10_000))
    }

    /// Portion of `benefit` counted as ordinary income under the provisional-income rule.
    pub fn taxable_social_security(
        &self,
        other_income: Money,
        benefit: Money,
        filing_status: FilingStatus,
    ) -> Money {
        if !benefit.is_positive() {
            return Money::ZERO;
        }
        let thresholds = self.tables.benefit_thresholds(filing_status);
        let provisional = other_income.non_negative() + benefit.apply_basis_points(HALF_BP);

        if provisional <= thresholds.base {
            return Money::ZERO;
        }

        let half_benefit = benefit.apply_basis_points(HALF_BP);
        if provisional <= thresholds.adjusted_base {
            return (provisional - thresholds.base)
                .apply_basis_points(HALF_BP)
                .min(half_benefit);
        }

        let first_tier = (thresholds.adjusted_base - thresholds.base)
            .apply_basis_points(HALF_BP)
            .min(half_benefit);
        let second_tier = (provisional - thresholds.adjusted_base).apply_basis_points(EIGHTY_FIVE_PERCENT_BP);
        (first_tier + second_tier).min(benefit.apply_basis_points(EIGHTY_FIVE_PERCENT_BP))
    }

    pub fn early_withdrawal_penalty(&self, pre_tax_withdrawal: Money, age: u32) -> Money {
        if age >= self.tables.penalty_free_age || !pre_tax_withdrawal.is_positive() {
            return Money::ZERO;
        }
        pre_tax_withdrawal.apply_basis_points(self.tables.early_withdrawal_penalty_bp)
    }

    fn taxable_income(&self, income: Money, filing_status: FilingStatus, factor: f64) -> Money {
        let deduction = self.tables.federal(filing_status).standard_deduction.scale(factor);
        (income - deduction).non_negative()
    }

    fn federal_on_taxable(&self, taxable: Money, filing_status: FilingStatus, factor: f64) -> Money {
        marginal_tax(taxable, self.tables.federal(filing_status).brackets, factor)
    }

    fn state_on_taxable(&self, taxable: Money, state: StateCode, factor: f64) -> Money {
        match self.tables.state(state) {
            StateIncomeTax::None => Money::ZERO,
            StateIncomeTax::Flat { rate_bp } => taxable.apply_basis_points(rate_bp),
            StateIncomeTax::Progressive { brackets } => marginal_tax(taxable, brackets, factor),
        }
    }
}

/// Convenience over the current tables.
pub fn compute_tax(
    income: Money,
    filing_status: FilingStatus,
    state: StateCode,
    year_index: u32,
    bracket_inflation_percent: f64,
) -> Money {
    TaxModel::default().compute_tax(income, filing_status, state, year_index, bracket_inflation_percent)
}

fn marginal_tax(taxable: Money, brackets: &[Bracket], factor: f64) -> Money {
    if !taxable.is_positive() {
        return Money::ZERO;
    }

    let mut scaled: i128 = 0;
    for (i, bracket) in brackets.iter().enumerate() {
        let lower = bracket.floor.scale(factor);
        if taxable <= lower {
            break;
        }
        let top = match brackets.get(i + 1) {
            Some(next) => taxable.min(next.floor.scale(factor)),
            None => taxable,
        };
        scaled += (top - lower).cents() as i128 * bracket.rate_bp as i128;
    }
    Money::from_cents(round_div(scaled, 10_000))
}
