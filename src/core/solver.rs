use chrono::Months;
use serde::Serialize;
use tracing::{debug, info};

use super::engine::{project, summarize};
use super::money::Money;
use super::types::{PlanInput, TweakParameters};
use super::validator::validate;

pub const DEFAULT_MAX_RETIREMENT_AGE: u32 = 80;

#[derive(Debug, Clone, Copy)]
pub struct RetirementAgeSolveConfig {
    pub max_retirement_age: u32,
}

impl Default for RetirementAgeSolveConfig {
    fn default() -> Self {
        Self {
            max_retirement_age: DEFAULT_MAX_RETIREMENT_AGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementAgeCandidate {
    pub retirement_age: u32,
    pub is_solvent: bool,
    pub depletion_age: Option<u32>,
    pub final_net_worth: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementAgeSolveResult {
    pub requested_retirement_age: u32,
    pub max_retirement_age: u32,
    pub solved_retirement_age: Option<u32>,
    pub candidates: Vec<RetirementAgeCandidate>,
    pub feasible: bool,
    pub message: String,
}

/// Earliest retirement age, starting at the requested one, at which the plan
/// never runs short. The calendar start year is held fixed, so each later
/// candidate moves the target date out by the same number of years.
pub fn solve_retirement_age(
    input: &PlanInput,
    tweak: &TweakParameters,
    config: RetirementAgeSolveConfig,
) -> Result<RetirementAgeSolveResult, String> {
    validate_config(input, config)?;

    let upper = config.max_retirement_age.min(input.life_expectancy);
    let mut candidates = Vec::new();
    let mut solved_retirement_age = None;

    for retirement_age in input.retirement_age..=upper {
        let candidate_input = shifted_input(input, retirement_age)?;
        let snapshots = project(&candidate_input, tweak);
        let summary = summarize(&snapshots, &candidate_input, tweak);

        debug!(
            target: "retire::solver",
            retirement_age,
            solvent = summary.is_solvent,
            depletion_age = ?summary.depletion_age,
            "evaluated retirement age"
        );
        candidates.push(RetirementAgeCandidate {
            retirement_age,
            is_solvent: summary.is_solvent,
            depletion_age: summary.depletion_age,
            final_net_worth: summary.final_net_worth,
        });

        if summary.is_solvent {
            solved_retirement_age = Some(retirement_age);
            break;
        }
    }

    let message = match solved_retirement_age {
        Some(age) if age == input.retirement_age => {
            "Plan is already solvent at the requested retirement age.".to_string()
        }
        Some(age) => format!("Earliest solvent retirement age is {age}."),
        None => format!("No solvent retirement age found up to {upper}."),
    };
    info!(target: "retire::solver", solved = ?solved_retirement_age, "{message}");

    Ok(RetirementAgeSolveResult {
        requested_retirement_age: input.retirement_age,
        max_retirement_age: upper,
        solved_retirement_age,
        feasible: solved_retirement_age.is_some(),
        candidates,
        message,
    })
}

fn shifted_input(input: &PlanInput, retirement_age: u32) -> Result<PlanInput, String> {
    let delay = retirement_age - input.retirement_age;
    let target_retirement_date = input
        .target_retirement_date
        .checked_add_months(Months::new(delay * 12))
        .ok_or_else(|| "target retirement date out of range".to_string())?;
    Ok(PlanInput {
        retirement_age,
        target_retirement_date,
        ..input.clone()
    })
}

fn validate_config(input: &PlanInput, config: RetirementAgeSolveConfig) -> Result<(), String> {
    let validation = validate(input);
    if let Some(issue) = validation.issues.first() {
        return Err(format!("{}: {}", issue.field, issue.message));
    }
    if config.max_retirement_age < input.retirement_age {
        return Err("max_retirement_age must be >= retirement_age".to_string());
    }
    if config.max_retirement_age < input.current_age {
        return Err("max_retirement_age must be >= current_age".to_string());
    }
    Ok(())
}
