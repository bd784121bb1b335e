use super::money::{Money, compound_factor};

pub const MIN_CLAIM_AGE: u32 = 62;
pub const MAX_CLAIM_AGE: u32 = 70;
pub const FULL_RETIREMENT_AGE: u32 = 67;

// Adjustments are counted in 1/3600ths of the full-retirement-age benefit:
// 5/9 of 1% = 20, 5/12 of 1% = 15, 2/3 of 1% = 24.
const ADJUSTMENT_SCALE: i64 = 3_600;
const EARLY_FIRST_TIER_MONTHS: u32 = 36;
const EARLY_FIRST_TIER_UNITS: i64 = 20;
const EARLY_SECOND_TIER_UNITS: i64 = 15;
const DELAYED_CREDIT_UNITS: i64 = 24;

/// Share of the full-retirement-age benefit paid when claiming at
/// `claim_age`, in 1/3600ths. Ages outside 62..=70 are clamped to the
/// nearest supported age in every build; `validate` reports them as issues.
pub fn adjustment_units(claim_age: u32) -> i64 {
    let claim_age = claim_age.clamp(MIN_CLAIM_AGE, MAX_CLAIM_AGE);

    if claim_age < FULL_RETIREMENT_AGE {
        let months_early = (FULL_RETIREMENT_AGE - claim_age) * 12;
        let first = months_early.min(EARLY_FIRST_TIER_MONTHS) as i64;
        let rest = months_early.saturating_sub(EARLY_FIRST_TIER_MONTHS) as i64;
        ADJUSTMENT_SCALE - first * EARLY_FIRST_TIER_UNITS - rest * EARLY_SECOND_TIER_UNITS
    } else {
        let months_delayed = ((claim_age - FULL_RETIREMENT_AGE) * 12) as i64;
        ADJUSTMENT_SCALE + months_delayed * DELAYED_CREDIT_UNITS
    }
}

pub fn monthly_benefit(claim_age: u32, estimate_at_full_retirement_age: Money) -> Money {
    estimate_at_full_retirement_age
        .non_negative()
        .mul_ratio(adjustment_units(claim_age), ADJUSTMENT_SCALE)
}

/// Benefit received during the year the person is `age`, COLA-adjusted from the claim year.
pub fn annual_benefit(
    age: u32,
    claim_age: u32,
    estimate_at_full_retirement_age: Money,
    cola_percent: f64,
) -> Money {
    if age < claim_age {
        return Money::ZERO;
    }
    let first_year = monthly_benefit(claim_age, estimate_at_full_retirement_age).mul_ratio(12, 1);
    first_year.scale(compound_factor(cola_percent, age - claim_age))
}
