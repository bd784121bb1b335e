use super::money::{Money, compound_factor};
use super::types::StateCode;

pub const MEDICARE_AGE: u32 = 65;

/// Private-insurance premium and out-of-pocket cost before Medicare, at the
/// age-zero baseline, in plan-start dollars.
const PRE_MEDICARE_BASE: Money = Money::from_dollars(5_000);
/// Each year of age adds this share of the base, in basis points.
const PRE_MEDICARE_AGE_STEP_BP: i64 = 150;
/// Part B and Part D premiums, a supplement plan and typical out-of-pocket spending.
const MEDICARE_ANNUAL: Money = Money::from_dollars(7_000);

/// Regional premium level relative to the national average, in basis points.
/// Applies to private coverage only; Medicare premiums are national.
pub fn state_multiplier_bp(state: StateCode) -> i64 {
    use StateCode::*;
    match state {
        AK => 15_000,
        WY => 13_500,
        WV | VT => 12_500,
        NY | CT | NJ | SD | NE => 11_500,
        MA | DE | LA | MS | NC | SC | TX => 10_500,
        AZ | MI | MN | NH | NM | OH | UT => 9_000,
        _ => 10_000,
    }
}

/// Annual healthcare cost at `age`, `year_index` years after the plan starts.
pub fn annual_cost(age: u32, state: StateCode, year_index: u32, inflation_percent: f64) -> Money {
    let base = if age >= MEDICARE_AGE {
        MEDICARE_ANNUAL
    } else {
        PRE_MEDICARE_BASE
            .mul_ratio(10_000 + age as i64 * PRE_MEDICARE_AGE_STEP_BP, 10_000)
            .mul_ratio(state_multiplier_bp(state), 10_000)
    };
    base.scale(compound_factor(inflation_percent, year_index))
}
