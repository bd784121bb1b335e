//! Versioned tax tables. Thresholds are in today's money for `TaxTables::year`;
//! the tax model inflates them per simulated year.

use super::money::Money;
use super::types::{FilingStatus, StateCode};

/// Marginal band: `rate_bp` applies to income from `floor` up to the next band's floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bracket {
    pub floor: Money,
    pub rate_bp: u32,
}

const fn band(floor_dollars: i64, rate_bp: u32) -> Bracket {
    Bracket {
        floor: Money::from_dollars(floor_dollars),
        rate_bp,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FederalSchedule {
    pub standard_deduction: Money,
    pub brackets: &'static [Bracket],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateIncomeTax {
    None,
    Flat { rate_bp: u32 },
    Progressive { brackets: &'static [Bracket] },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PayrollRules {
    pub social_security_rate_bp: u32,
    pub social_security_wage_base: Money,
    pub medicare_rate_bp: u32,
}

/// Provisional-income thresholds for taxing Social Security benefits. Not indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BenefitTaxThresholds {
    pub base: Money,
    pub adjusted_base: Money,
}

#[derive(Copy, Clone, Debug)]
pub struct TaxTables {
    pub year: i32,
    pub single: FederalSchedule,
    pub married_joint: FederalSchedule,
    pub married_separate: FederalSchedule,
    pub head_of_household: FederalSchedule,
    pub payroll: PayrollRules,
    pub early_withdrawal_penalty_bp: u32,
    pub penalty_free_age: u32,
    state_rules: fn(StateCode) -> StateIncomeTax,
}

impl TaxTables {
    pub fn federal(&self, status: FilingStatus) -> &FederalSchedule {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedJoint => &self.married_joint,
            FilingStatus::MarriedSeparate => &self.married_separate,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }

    pub fn state(&self, state: StateCode) -> StateIncomeTax {
        (self.state_rules)(state)
    }

    pub fn benefit_thresholds(&self, status: FilingStatus) -> BenefitTaxThresholds {
        match status {
            FilingStatus::Single | FilingStatus::HeadOfHousehold => BenefitTaxThresholds {
                base: Money::from_dollars(25_000),
                adjusted_base: Money::from_dollars(34_000),
            },
            FilingStatus::MarriedJoint => BenefitTaxThresholds {
                base: Money::from_dollars(32_000),
                adjusted_base: Money::from_dollars(44_000),
            },
            FilingStatus::MarriedSeparate => BenefitTaxThresholds {
                base: Money::ZERO,
                adjusted_base: Money::ZERO,
            },
        }
    }
}

const FEDERAL_SINGLE_2025: &[Bracket] = &[
    band(0, 1_000),
    band(11_925, 1_200),
    band(48_475, 2_200),
    band(103_350, 2_400),
    band(197_300, 3_200),
    band(250_525, 3_500),
    band(626_350, 3_700),
];

const FEDERAL_MARRIED_JOINT_2025: &[Bracket] = &[
    band(0, 1_000),
    band(23_850, 1_200),
    band(96_950, 2_200),
    band(206_700, 2_400),
    band(394_600, 3_200),
    band(501_050, 3_500),
    band(751_600, 3_700),
];

const FEDERAL_MARRIED_SEPARATE_2025: &[Bracket] = &[
    band(0, 1_000),
    band(11_925, 1_200),
    band(48_475, 2_200),
    band(103_350, 2_400),
    band(197_300, 3_200),
    band(250_525, 3_500),
    band(375_800, 3_700),
];

const FEDERAL_HEAD_OF_HOUSEHOLD_2025: &[Bracket] = &[
    band(0, 1_000),
    band(17_000, 1_200),
    band(64_850, 2_200),
    band(103_350, 2_400),
    band(197_300, 3_200),
    band(250_500, 3_500),
    band(626_350, 3_700),
];

pub static TAX_YEAR_2025: TaxTables = TaxTables {
    year: 2025,
    single: FederalSchedule {
        standard_deduction: Money::from_dollars(15_000),
        brackets: FEDERAL_SINGLE_2025,
    },
    married_joint: FederalSchedule {
        standard_deduction: Money::from_dollars(30_000),
        brackets: FEDERAL_MARRIED_JOINT_2025,
    },
    married_separate: FederalSchedule {
        standard_deduction: Money::from_dollars(15_000),
        brackets: FEDERAL_MARRIED_SEPARATE_2025,
    },
    head_of_household: FederalSchedule {
        standard_deduction: Money::from_dollars(22_500),
        brackets: FEDERAL_HEAD_OF_HOUSEHOLD_2025,
    },
    payroll: PayrollRules {
        social_security_rate_bp: 620,
        social_security_wage_base: Money::from_dollars(176_100),
        medicare_rate_bp: 145,
    },
    early_withdrawal_penalty_bp: 1_000,
    penalty_free_age: 60,
    state_rules: state_income_tax_2025,
};

macro_rules! progressive {
    ($(($floor:expr, $rate_bp:expr)),+ $(,)?) => {{
        const BRACKETS: &[Bracket] = &[$(band($floor, $rate_bp)),+];
        StateIncomeTax::Progressive { brackets: BRACKETS }
    }};
}

// Single-filer schedules; state brackets are applied to every filing status.
fn state_income_tax_2025(state: StateCode) -> StateIncomeTax {
    use StateCode::*;
    use StateIncomeTax::{Flat, None as NoTax};

    match state {
        AK | FL | NV | NH | SD | TN | TX | WA | WY => NoTax,
        AZ => Flat { rate_bp: 250 },
        CO => Flat { rate_bp: 440 },
        GA => Flat { rate_bp: 519 },
        ID => Flat { rate_bp: 570 },
        IL => Flat { rate_bp: 495 },
        IN => Flat { rate_bp: 300 },
        IA => Flat { rate_bp: 380 },
        KY => Flat { rate_bp: 400 },
        LA => Flat { rate_bp: 300 },
        MI => Flat { rate_bp: 425 },
        NC => Flat { rate_bp: 425 },
        PA => Flat { rate_bp: 307 },
        UT => Flat { rate_bp: 455 },
        AL => progressive![(0, 200), (500, 400), (3_000, 500)],
        AR => progressive![(0, 200), (4_500, 390)],
        CA => progressive![
            (0, 100),
            (10_756, 200),
            (25_499, 400),
            (40_245, 600),
            (55_866, 800),
            (70_606, 930),
            (360_659, 1_030),
            (432_787, 1_130),
            (721_314, 1_230),
            (1_000_000, 1_330),
        ],
        CT => progressive![
            (0, 200),
            (10_000, 450),
            (50_000, 550),
            (100_000, 600),
            (200_000, 650),
            (250_000, 690),
            (500_000, 699),
        ],
        DE => progressive![
            (0, 0),
            (2_000, 220),
            (5_000, 390),
            (10_000, 480),
            (20_000, 520),
            (25_000, 555),
            (60_000, 660),
        ],
        DC => progressive![
            (0, 400),
            (10_000, 600),
            (40_000, 650),
            (60_000, 850),
            (250_000, 925),
            (500_000, 975),
            (1_000_000, 1_075),
        ],
        HI => progressive![
            (0, 140),
            (9_600, 320),
            (14_400, 550),
            (19_200, 640),
            (24_000, 680),
            (36_000, 720),
            (48_000, 760),
            (125_000, 790),
            (175_000, 825),
            (225_000, 900),
            (275_000, 1_000),
            (325_000, 1_100),
        ],
        KS => progressive![(0, 520), (23_000, 558)],
        ME => progressive![(0, 580), (26_050, 675), (61_600, 715)],
        MD => progressive![
            (0, 200),
            (1_000, 300),
            (2_000, 400),
            (3_000, 475),
            (100_000, 500),
            (125_000, 525),
            (150_000, 550),
            (250_000, 575),
        ],
        MA => progressive![(0, 500), (1_083_150, 900)],
        MN => progressive![(0, 535), (31_690, 680), (104_090, 785), (193_240, 985)],
        MS => progressive![(0, 0), (10_000, 440)],
        MO => progressive![
            (0, 0),
            (1_313, 200),
            (2_626, 250),
            (3_939, 300),
            (5_252, 350),
            (6_565, 400),
            (7_878, 450),
            (9_191, 470),
        ],
        MT => progressive![(0, 470), (21_100, 590)],
        NE => progressive![(0, 246), (3_700, 351), (22_170, 501), (35_730, 520)],
        NJ => progressive![
            (0, 140),
            (20_000, 175),
            (35_000, 350),
            (40_000, 553),
            (75_000, 637),
            (500_000, 897),
            (1_000_000, 1_075),
        ],
        NM => progressive![
            (0, 150),
            (5_500, 320),
            (16_500, 430),
            (33_500, 470),
            (66_500, 490),
            (210_000, 590),
        ],
        NY => progressive![
            (0, 400),
            (8_500, 450),
            (11_700, 525),
            (13_900, 550),
            (80_650, 600),
            (215_400, 685),
            (1_077_550, 965),
            (5_000_000, 1_030),
            (25_000_000, 1_090),
        ],
        ND => progressive![(0, 0), (48_475, 195), (244_825, 250)],
        OH => progressive![(0, 0), (26_050, 275), (100_000, 350)],
        OK => progressive![
            (0, 25),
            (1_000, 75),
            (2_500, 175),
            (3_750, 275),
            (4_900, 375),
            (7_200, 475),
        ],
        OR => progressive![(0, 475), (4_400, 675), (11_050, 875), (125_000, 990)],
        RI => progressive![(0, 375), (79_900, 475), (181_650, 599)],
        SC => progressive![(0, 0), (3_560, 300), (17_830, 620)],
        VT => progressive![(0, 335), (47_900, 660), (116_000, 760), (242_000, 875)],
        VA => progressive![(0, 200), (3_000, 300), (5_000, 500), (17_000, 575)],
        WV => progressive![
            (0, 236),
            (10_000, 315),
            (25_000, 354),
            (40_000, 472),
            (60_000, 512),
        ],
        WI => progressive![(0, 350), (14_320, 440), (28_640, 530), (315_310, 765)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ordered(brackets: &[Bracket], label: &str) {
        assert_eq!(brackets[0].floor, Money::ZERO, "{label} must start at zero");
        for pair in brackets.windows(2) {
            assert!(pair[0].floor < pair[1].floor, "{label} floors must increase");
        }
    }

    #[test]
    fn federal_schedules_start_at_zero_and_increase() {
        for status in FilingStatus::ALL {
            let schedule = TAX_YEAR_2025.federal(status);
            assert_ordered(schedule.brackets, status.as_str());
            assert!(schedule.standard_deduction.is_positive());
        }
    }

    #[test]
    fn every_state_has_a_well_formed_rule() {
        assert_eq!(StateCode::ALL.len(), 51);
        for &state in StateCode::ALL {
            match TAX_YEAR_2025.state(state) {
                StateIncomeTax::None => {}
                StateIncomeTax::Flat { rate_bp } => assert!(rate_bp > 0 && rate_bp < 2_000),
                StateIncomeTax::Progressive { brackets } => assert_ordered(brackets, state.code()),
            }
        }
    }

    #[test]
    fn no_income_tax_states_are_marked_none() {
        for state in [StateCode::TX, StateCode::FL, StateCode::WA] {
            assert_eq!(TAX_YEAR_2025.state(state), StateIncomeTax::None);
        }
    }
}
