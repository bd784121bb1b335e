use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;
use super::money::Money;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    #[serde(alias = "married_jointly", alias = "marriedJoint")]
    MarriedJoint,
    #[serde(alias = "married_separately", alias = "marriedSeparate")]
    MarriedSeparate,
    #[serde(alias = "headOfHousehold")]
    HeadOfHousehold,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::MarriedSeparate,
        FilingStatus::HeadOfHousehold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married_joint",
            FilingStatus::MarriedSeparate => "married_separate",
            FilingStatus::HeadOfHousehold => "head_of_household",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilingStatus::Single => "Single",
            FilingStatus::MarriedJoint => "Married Filing Jointly",
            FilingStatus::MarriedSeparate => "Married Filing Separately",
            FilingStatus::HeadOfHousehold => "Head of Household",
        }
    }
}

impl FromStr for FilingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single" => Ok(FilingStatus::Single),
            "married_joint" | "married_jointly" => Ok(FilingStatus::MarriedJoint),
            "married_separate" | "married_separately" => Ok(FilingStatus::MarriedSeparate),
            "head_of_household" => Ok(FilingStatus::HeadOfHousehold),
            _ => Err(ParseEnumError::FilingStatus(s.to_string())),
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! subdivisions {
    ($($code:ident => $name:literal),+ $(,)?) => {
        /// US state (or DC) of residence, keyed by its two-letter postal code.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
        pub enum StateCode {
            $($code),+
        }

        impl StateCode {
            pub const ALL: &'static [StateCode] = &[$(StateCode::$code),+];

            pub fn code(self) -> &'static str {
                match self {
                    $(StateCode::$code => stringify!($code)),+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(StateCode::$code => $name),+
                }
            }
        }

        impl FromStr for StateCode {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $(stringify!($code) => Ok(StateCode::$code),)+
                    _ => Err(ParseEnumError::State(s.to_string())),
                }
            }
        }
    };
}

subdivisions! {
    AL => "Alabama",
    AK => "Alaska",
    AZ => "Arizona",
    AR => "Arkansas",
    CA => "California",
    CO => "Colorado",
    CT => "Connecticut",
    DE => "Delaware",
    DC => "District of Columbia",
    FL => "Florida",
    GA => "Georgia",
    HI => "Hawaii",
    ID => "Idaho",
    IL => "Illinois",
    IN => "Indiana",
    IA => "Iowa",
    KS => "Kansas",
    KY => "Kentucky",
    LA => "Louisiana",
    ME => "Maine",
    MD => "Maryland",
    MA => "Massachusetts",
    MI => "Michigan",
    MN => "Minnesota",
    MS => "Mississippi",
    MO => "Missouri",
    MT => "Montana",
    NE => "Nebraska",
    NV => "Nevada",
    NH => "New Hampshire",
    NJ => "New Jersey",
    NM => "New Mexico",
    NY => "New York",
    NC => "North Carolina",
    ND => "North Dakota",
    OH => "Ohio",
    OK => "Oklahoma",
    OR => "Oregon",
    PA => "Pennsylvania",
    RI => "Rhode Island",
    SC => "South Carolina",
    SD => "South Dakota",
    TN => "Tennessee",
    TX => "Texas",
    UT => "Utah",
    VT => "Vermont",
    VA => "Virginia",
    WA => "Washington",
    WV => "West Virginia",
    WI => "Wisconsin",
    WY => "Wyoming",
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    PreTax,
    Roth,
    PostTax,
}

impl AccountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountKind::PreTax => "pre_tax",
            AccountKind::Roth => "roth",
            AccountKind::PostTax => "post_tax",
        }
    }
}

impl FromStr for AccountKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pre_tax" | "pretax" => Ok(AccountKind::PreTax),
            "roth" => Ok(AccountKind::Roth),
            "post_tax" | "posttax" | "taxable" => Ok(AccountKind::PostTax),
            _ => Err(ParseEnumError::Account(s.to_string())),
        }
    }
}

/// Balances (or amounts) across the three account types.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub pre_tax: Money,
    pub roth: Money,
    pub post_tax: Money,
}

impl Allocation {
    pub const fn new(pre_tax: Money, roth: Money, post_tax: Money) -> Self {
        Self {
            pre_tax,
            roth,
            post_tax,
        }
    }

    pub fn total(self) -> Money {
        self.pre_tax + self.roth + self.post_tax
    }

    pub fn get(self, account: AccountKind) -> Money {
        match account {
            AccountKind::PreTax => self.pre_tax,
            AccountKind::Roth => self.roth,
            AccountKind::PostTax => self.post_tax,
        }
    }

    pub fn get_mut(&mut self, account: AccountKind) -> &mut Money {
        match account {
            AccountKind::PreTax => &mut self.pre_tax,
            AccountKind::Roth => &mut self.roth,
            AccountKind::PostTax => &mut self.post_tax,
        }
    }
}

/// How an allocation field got its current value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    #[default]
    Unset,
    Auto,
    Manual,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationState {
    pub pre_tax: FieldState,
    pub roth: FieldState,
    pub post_tax: FieldState,
}

impl AllocationState {
    pub const AUTO: AllocationState = AllocationState {
        pre_tax: FieldState::Auto,
        roth: FieldState::Auto,
        post_tax: FieldState::Auto,
    };

    pub fn get(self, account: AccountKind) -> FieldState {
        match account {
            AccountKind::PreTax => self.pre_tax,
            AccountKind::Roth => self.roth,
            AccountKind::PostTax => self.post_tax,
        }
    }

    pub fn set(&mut self, account: AccountKind, state: FieldState) {
        match account {
            AccountKind::PreTax => self.pre_tax = state,
            AccountKind::Roth => self.roth = state,
            AccountKind::PostTax => self.post_tax = state,
        }
    }

    pub fn any_manual(self) -> bool {
        [self.pre_tax, self.roth, self.post_tax].contains(&FieldState::Manual)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    /// Date the plan is made; `year_index = 0` is this calendar year.
    pub as_of: NaiveDate,
    pub target_retirement_date: NaiveDate,
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub filing_status: FilingStatus,
    pub state: StateCode,
    pub annual_pre_tax_income: Money,
    pub annual_expenses: Money,
    pub total_savings: Money,
    pub allocation: Allocation,
    pub allocation_state: AllocationState,
    pub social_security_claim_age: u32,
    pub social_security_monthly_estimate: Money,
}

impl PlanInput {
    /// Number of simulated years; the projection emits `horizon_years() + 1` snapshots.
    pub fn horizon_years(&self) -> Option<u32> {
        self.life_expectancy.checked_sub(self.current_age)
    }

    /// Calendar year of `year_index = 0`.
    pub fn start_year(&self) -> i32 {
        self.as_of.year()
    }
}

/// Retirement age implied by a target date: whole anniversaries of `as_of`
/// reached on or before `target`, added to the current age.
pub fn retirement_age_for_date(current_age: u32, target: NaiveDate, as_of: NaiveDate) -> u32 {
    if target <= as_of {
        return current_age;
    }
    let mut years = target.year() - as_of.year();
    if (target.month(), target.day()) < (as_of.month(), as_of.day()) {
        years -= 1;
    }
    current_age + years.max(0) as u32
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "order")]
pub enum WithdrawalPolicy {
    #[default]
    TaxableFirst,
    Proportional,
    Custom([AccountKind; 3]),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TweakParameters {
    pub safe_withdrawal_rate_percent: f64,
    pub tax_bracket_inflation_percent: f64,
    pub tweak_mode: bool,
    pub inflation_percent: f64,
    pub investment_return_percent: f64,
    pub social_security_cola_percent: f64,
    pub withdrawal_policy: WithdrawalPolicy,
    /// Add the modelled healthcare cost to each year's spending.
    pub healthcare_costs: bool,
    pub healthcare_inflation_percent: f64,
}

impl Default for TweakParameters {
    fn default() -> Self {
        Self {
            safe_withdrawal_rate_percent: 4.0,
            tax_bracket_inflation_percent: 2.5,
            tweak_mode: false,
            inflation_percent: 3.0,
            investment_return_percent: 7.0,
            social_security_cola_percent: 2.5,
            withdrawal_policy: WithdrawalPolicy::TaxableFirst,
            healthcare_costs: true,
            healthcare_inflation_percent: 5.0,
        }
    }
}

impl TweakParameters {
    pub fn swr_override_percent(&self) -> Option<f64> {
        self.tweak_mode.then_some(self.safe_withdrawal_rate_percent)
    }
}

pub fn safe_withdrawal_label(rate_percent: f64) -> String {
    format!("Safe Withdrawal ({rate_percent:.1}%)")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    pub age: u32,
    pub calendar_year: i32,
    pub is_retired: bool,
    /// Wages, Social Security and gross withdrawals received in the year.
    pub gross_income: Money,
    /// Income and payroll tax, plus any early withdrawal penalty.
    pub tax_owed: Money,
    pub social_security_income: Money,
    pub withdrawal_from_pre_tax: Money,
    pub withdrawal_from_roth: Money,
    pub withdrawal_from_post_tax: Money,
    pub withdrawal_target: Money,
    /// Living expenses, inflated; healthcare is reported separately.
    pub expenses: Money,
    pub healthcare: Money,
    /// Spending no account could fund; carried as a negative post-tax balance.
    pub shortfall: Money,
    pub ending_balance_pre_tax: Money,
    pub ending_balance_roth: Money,
    pub ending_balance_post_tax: Money,
    pub total_net_worth: Money,
}

impl YearSnapshot {
    pub fn total_withdrawal(&self) -> Money {
        self.withdrawal_from_pre_tax + self.withdrawal_from_roth + self.withdrawal_from_post_tax
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub is_solvent: bool,
    pub depletion_age: Option<u32>,
    pub final_net_worth: Money,
    pub net_worth_at_retirement: Money,
    pub safe_withdrawal_rate_percent: f64,
    pub safe_withdrawal_amount: Money,
    pub safe_withdrawal_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub snapshots: Vec<YearSnapshot>,
    pub summary: ProjectionSummary,
}
