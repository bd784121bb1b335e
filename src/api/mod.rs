use axum::{
    Router,
    extract::{Json, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, Months, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    AccountKind, Allocation, AllocationDraft, AllocationState, FilingStatus, MAX_CLAIM_AGE,
    MEDICARE_AGE, MIN_CLAIM_AGE, Money, PlanError, PlanInput, ProjectionSession,
    ProjectionSummary, RetirementAgeSolveConfig, RetirementAgeSolveResult, StateCode, TAX_YEAR_2025, TweakParameters, ValidationIssue,
    WithdrawalPolicy, YearSnapshot, calculate, repair, retirement_age_for_date,
    solve_retirement_age, validate,
};

const DEFAULT_RETIREMENT_AGE: u32 = 65;
/// Largest dollar amount accepted for any balance, wage or expense.
const MAX_AMOUNT_DOLLARS: f64 = 1e12;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFilingStatus {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl From<CliFilingStatus> for FilingStatus {
    fn from(value: CliFilingStatus) -> Self {
        match value {
            CliFilingStatus::Single => FilingStatus::Single,
            CliFilingStatus::MarriedJoint => FilingStatus::MarriedJoint,
            CliFilingStatus::MarriedSeparate => FilingStatus::MarriedSeparate,
            CliFilingStatus::HeadOfHousehold => FilingStatus::HeadOfHousehold,
        }
    }
}

impl From<FilingStatus> for CliFilingStatus {
    fn from(value: FilingStatus) -> Self {
        match value {
            FilingStatus::Single => CliFilingStatus::Single,
            FilingStatus::MarriedJoint => CliFilingStatus::MarriedJoint,
            FilingStatus::MarriedSeparate => CliFilingStatus::MarriedSeparate,
            FilingStatus::HeadOfHousehold => CliFilingStatus::HeadOfHousehold,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliWithdrawalPolicy {
    TaxableFirst,
    Proportional,
    Custom,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiWithdrawalPolicy {
    #[serde(alias = "taxableFirst", alias = "taxable_first")]
    TaxableFirst,
    #[serde(alias = "pro-rata", alias = "proRata")]
    Proportional,
    Custom,
}

impl From<ApiWithdrawalPolicy> for CliWithdrawalPolicy {
    fn from(value: ApiWithdrawalPolicy) -> Self {
        match value {
            ApiWithdrawalPolicy::TaxableFirst => CliWithdrawalPolicy::TaxableFirst,
            ApiWithdrawalPolicy::Proportional => CliWithdrawalPolicy::Proportional,
            ApiWithdrawalPolicy::Custom => CliWithdrawalPolicy::Custom,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    target_retirement_date: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
    life_expectancy: Option<u32>,
    filing_status: Option<String>,
    state: Option<String>,

    annual_income: Option<f64>,
    annual_expenses: Option<f64>,
    total_savings: Option<f64>,
    pre_tax: Option<f64>,
    roth: Option<f64>,
    post_tax: Option<f64>,

    social_security_claim_age: Option<u32>,
    social_security_monthly_estimate: Option<f64>,

    safe_withdrawal_rate: Option<f64>,
    tax_bracket_inflation: Option<f64>,
    tweak_mode: Option<bool>,
    inflation_rate: Option<f64>,
    investment_return: Option<f64>,
    social_security_cola: Option<f64>,
    withdrawal_policy: Option<ApiWithdrawalPolicy>,
    withdrawal_order: Option<String>,
    max_retirement_age: Option<u32>,
    healthcare_costs: Option<bool>,
    healthcare_inflation: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "retire",
    about = "Year-by-year retirement projection (pre-tax, Roth and post-tax accounts with US federal and state tax)"
)]
struct Cli {
    #[arg(long)]
    current_age: u32,
    #[arg(
        long,
        help = "Retirement age; derived from --target-retirement-date when omitted, else 65"
    )]
    retirement_age: Option<u32>,
    #[arg(long, help = "Target retirement date, YYYY-MM-DD")]
    target_retirement_date: Option<NaiveDate>,
    #[arg(long, help = "Date the plan is made, YYYY-MM-DD; defaults to today")]
    as_of: Option<NaiveDate>,
    #[arg(long, default_value_t = 90)]
    life_expectancy: u32,
    #[arg(long, value_enum, default_value_t = CliFilingStatus::Single)]
    filing_status: CliFilingStatus,
    #[arg(long, default_value = "CA", help = "Two-letter state code, DC included")]
    state: StateCode,
    #[arg(long, help = "Annual pre-tax wages in today's money")]
    annual_income: f64,
    #[arg(long, help = "Annual expenses in today's money")]
    annual_expenses: f64,
    #[arg(long)]
    total_savings: f64,
    #[arg(long, help = "Pre-tax balance; the 30/30/40 default split applies when no balance is given")]
    pre_tax: Option<f64>,
    #[arg(long)]
    roth: Option<f64>,
    #[arg(long)]
    post_tax: Option<f64>,
    #[arg(long, default_value_t = 67)]
    social_security_claim_age: u32,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Monthly Social Security benefit at full retirement age"
    )]
    social_security_monthly_estimate: f64,
    #[arg(long, default_value_t = 4.0, help = "Safe withdrawal rate in percent")]
    safe_withdrawal_rate: f64,
    #[arg(
        long,
        default_value_t = 2.5,
        help = "Annual tax bracket indexing in percent"
    )]
    tax_bracket_inflation: f64,
    #[arg(long, help = "Use the safe withdrawal rate for the first retirement year's withdrawal")]
    tweak_mode: bool,
    #[arg(long, default_value_t = 3.0, help = "Annual inflation of wages and expenses in percent")]
    inflation_rate: f64,
    #[arg(long, default_value_t = 7.0, help = "Annual investment return in percent")]
    investment_return: f64,
    #[arg(long, default_value_t = 2.5, help = "Social Security cost-of-living adjustment in percent")]
    social_security_cola: f64,
    #[arg(long, value_enum, default_value_t = CliWithdrawalPolicy::TaxableFirst)]
    withdrawal_policy: CliWithdrawalPolicy,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Account order for --withdrawal-policy custom, e.g. roth,post-tax,pre-tax"
    )]
    withdrawal_order: Vec<AccountKind>,
    #[arg(
        long,
        default_value_t = 80,
        help = "Latest retirement age tried when the plan runs out of money"
    )]
    max_retirement_age: u32,
    #[arg(long, help = "Leave healthcare costs out of yearly spending")]
    no_healthcare_costs: bool,
    #[arg(long, default_value_t = 5.0, help = "Annual healthcare cost inflation in percent")]
    healthcare_inflation: f64,
}

#[derive(Debug)]
struct ApiRequest {
    input: PlanInput,
    tweak: TweakParameters,
    solve: RetirementAgeSolveConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanReport {
    input: PlanInput,
    tweak: TweakParameters,
    summary: ProjectionSummary,
    snapshots: Vec<YearSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retirement_age_solve: Option<RetirementAgeSolveResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculateResponse {
    request_stamp: u64,
    published: bool,
    #[serde(flatten)]
    report: PlanReport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepairPayload {
    total_savings: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RepairResponse {
    total_savings: Money,
    allocation: Allocation,
    allocation_state: AllocationState,
}

#[derive(Debug, Serialize)]
struct OptionEntry {
    value: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionsResponse {
    tax_year: i32,
    filing_statuses: Vec<OptionEntry>,
    states: Vec<OptionEntry>,
    withdrawal_policies: [&'static str; 3],
    min_claim_age: u32,
    max_claim_age: u32,
    medicare_age: u32,
    tweak_defaults: TweakParameters,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<ValidationIssue>,
}

#[derive(Clone, Default)]
struct AppState {
    session: Arc<ProjectionSession<PlanReport>>,
}

fn build_inputs(cli: Cli) -> Result<(PlanInput, TweakParameters), String> {
    for (flag, value) in [
        ("--annual-income", cli.annual_income),
        ("--annual-expenses", cli.annual_expenses),
        ("--total-savings", cli.total_savings),
        ("--social-security-monthly-estimate", cli.social_security_monthly_estimate),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{flag} must be a non-negative amount"));
        }
        if value > MAX_AMOUNT_DOLLARS {
            return Err(format!("{flag} must be at most {MAX_AMOUNT_DOLLARS:.0}"));
        }
    }
    for (flag, value) in [("--pre-tax", cli.pre_tax), ("--roth", cli.roth), ("--post-tax", cli.post_tax)] {
        if value.is_some_and(|v| !v.is_finite() || v.abs() > MAX_AMOUNT_DOLLARS) {
            return Err(format!("{flag} must be a finite amount of at most {MAX_AMOUNT_DOLLARS:.0}"));
        }
    }

    if !cli.safe_withdrawal_rate.is_finite() || !(0.0..=100.0).contains(&cli.safe_withdrawal_rate) {
        return Err("--safe-withdrawal-rate must be between 0 and 100".to_string());
    }
    for (flag, value) in [
        ("--tax-bracket-inflation", cli.tax_bracket_inflation),
        ("--inflation-rate", cli.inflation_rate),
        ("--investment-return", cli.investment_return),
        ("--social-security-cola", cli.social_security_cola),
        ("--healthcare-inflation", cli.healthcare_inflation),
    ] {
        if !value.is_finite() || value <= -100.0 {
            return Err(format!("{flag} must be > -100"));
        }
    }

    let withdrawal_policy = match cli.withdrawal_policy {
        CliWithdrawalPolicy::TaxableFirst | CliWithdrawalPolicy::Proportional
            if !cli.withdrawal_order.is_empty() =>
        {
            return Err("--withdrawal-order requires --withdrawal-policy custom".to_string());
        }
        CliWithdrawalPolicy::TaxableFirst => WithdrawalPolicy::TaxableFirst,
        CliWithdrawalPolicy::Proportional => WithdrawalPolicy::Proportional,
        CliWithdrawalPolicy::Custom => WithdrawalPolicy::Custom(custom_order(&cli.withdrawal_order)?),
    };

    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let (retirement_age, target_retirement_date) = match (cli.retirement_age, cli.target_retirement_date) {
        (Some(age), Some(date)) => (age, date),
        (None, Some(date)) => (retirement_age_for_date(cli.current_age, date, as_of), date),
        (age, None) => {
            let age = age.unwrap_or(DEFAULT_RETIREMENT_AGE.max(cli.current_age));
            (age, years_after(as_of, age.saturating_sub(cli.current_age))?)
        }
    };

    let mut draft = AllocationDraft::new();
    draft.set_total(Money::from_dollars_f64(cli.total_savings));
    for (account, value) in [
        (AccountKind::PreTax, cli.pre_tax),
        (AccountKind::Roth, cli.roth),
        (AccountKind::PostTax, cli.post_tax),
    ] {
        if let Some(v) = value {
            draft.edit(account, Money::from_dollars_f64(v));
        }
    }
    let (total_savings, allocation, allocation_state) = draft.into_parts();

    let input = PlanInput {
        as_of,
        target_retirement_date,
        current_age: cli.current_age,
        retirement_age,
        life_expectancy: cli.life_expectancy,
        filing_status: cli.filing_status.into(),
        state: cli.state,
        annual_pre_tax_income: Money::from_dollars_f64(cli.annual_income),
        annual_expenses: Money::from_dollars_f64(cli.annual_expenses),
        total_savings,
        allocation,
        allocation_state,
        social_security_claim_age: cli.social_security_claim_age,
        social_security_monthly_estimate: Money::from_dollars_f64(cli.social_security_monthly_estimate),
    };
    let tweak = TweakParameters {
        safe_withdrawal_rate_percent: cli.safe_withdrawal_rate,
        tax_bracket_inflation_percent: cli.tax_bracket_inflation,
        tweak_mode: cli.tweak_mode,
        inflation_percent: cli.inflation_rate,
        investment_return_percent: cli.investment_return,
        social_security_cola_percent: cli.social_security_cola,
        withdrawal_policy,
        healthcare_costs: !cli.no_healthcare_costs,
        healthcare_inflation_percent: cli.healthcare_inflation,
    };
    Ok((input, tweak))
}

fn custom_order(order: &[AccountKind]) -> Result<[AccountKind; 3], String> {
    let err = || "--withdrawal-order must list pre-tax, roth and post-tax exactly once".to_string();
    let order: [AccountKind; 3] = order.try_into().map_err(|_| err())?;
    let distinct = order[0] != order[1] && order[1] != order[2] && order[0] != order[2];
    if distinct { Ok(order) } else { Err(err()) }
}

fn years_after(date: NaiveDate, years: u32) -> Result<NaiveDate, String> {
    date.checked_add_months(Months::new(years * 12))
        .ok_or_else(|| "--target-retirement-date is out of range".to_string())
}

/// Runs the projection and, when the plan runs short, the retirement age search.
fn run_calculation(request: &ApiRequest) -> Result<PlanReport, PlanError> {
    let projection = calculate(&request.input, &request.tweak)?;
    let retirement_age_solve = if projection.summary.is_solvent {
        None
    } else {
        match solve_retirement_age(&request.input, &request.tweak, request.solve) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(target: "retire::api", error = %e, "retirement age search skipped");
                None
            }
        }
    };
    Ok(PlanReport {
        input: request.input.clone(),
        tweak: request.tweak.clone(),
        summary: projection.summary,
        snapshots: projection.snapshots,
        retirement_age_solve,
    })
}

/// CLI entry: parses flags from the process arguments and returns the report as pretty JSON.
pub fn run_cli() -> Result<String, String> {
    let cli = Cli::parse();
    let solve = RetirementAgeSolveConfig {
        max_retirement_age: cli.max_retirement_age,
    };
    let (input, tweak) = build_inputs(cli)?;
    let report = run_calculation(&ApiRequest { input, tweak, solve }).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&report).map_err(|e| format!("Failed to serialize report: {e}"))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(AppState::default());

    let listener = TcpListener::bind(addr).await?;
    info!(target: "retire::api", %addr, "retirement planner API listening");
    info!(target: "retire::api", "local access: http://127.0.0.1:{port}/api/options");

    axum::serve(listener, app).await
}

fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/calculate",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .route("/api/latest", get(latest_handler))
        .route("/api/validate", post(validate_handler))
        .route("/api/repair-allocation", post(repair_handler))
        .route("/api/options", get(options_handler))
        .route("/healthz", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
}

async fn calculate_get_handler(State(state): State<AppState>, Query(payload): Query<PlanPayload>) -> Response {
    calculate_handler_impl(state, payload).await
}

async fn calculate_post_handler(State(state): State<AppState>, Json(payload): Json<PlanPayload>) -> Response {
    calculate_handler_impl(state, payload).await
}

async fn calculate_handler_impl(state: AppState, payload: PlanPayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let ticket = state.session.begin();
    let report = match tokio::task::spawn_blocking(move || run_calculation(&request)).await {
        Ok(Ok(report)) => report,
        Ok(Err(err)) => return plan_error_response(err),
        Err(err) => {
            warn!(target: "retire::api", error = %err, "calculation task failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Calculation failed");
        }
    };

    if state.session.is_superseded(ticket) {
        debug!(target: "retire::api", stamp = ticket.stamp(), "newer calculation already started");
    }
    let published = state.session.publish(ticket, report.clone());
    json_response(
        StatusCode::OK,
        CalculateResponse {
            request_stamp: ticket.stamp(),
            published,
            report,
        },
    )
}

async fn latest_handler(State(state): State<AppState>) -> Response {
    match state.session.latest() {
        Some((request_stamp, report)) => json_response(
            StatusCode::OK,
            CalculateResponse {
                request_stamp,
                published: true,
                report: (*report).clone(),
            },
        ),
        None => error_response(StatusCode::NOT_FOUND, "No calculation has completed yet"),
    }
}

async fn validate_handler(Json(payload): Json<PlanPayload>) -> Response {
    match api_request_from_payload(payload) {
        Ok(request) => json_response(StatusCode::OK, validate(&request.input)),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn repair_handler(Json(payload): Json<RepairPayload>) -> Response {
    if !payload.total_savings.is_finite() || payload.total_savings < 0.0 {
        return error_response(StatusCode::BAD_REQUEST, "totalSavings must be a non-negative amount");
    }
    let total_savings = Money::from_dollars_f64(payload.total_savings);
    json_response(
        StatusCode::OK,
        RepairResponse {
            total_savings,
            allocation: repair(total_savings),
            allocation_state: AllocationState::AUTO,
        },
    )
}

async fn options_handler() -> Response {
    json_response(StatusCode::OK, options_response())
}

fn options_response() -> OptionsResponse {
    OptionsResponse {
        tax_year: TAX_YEAR_2025.year,
        filing_statuses: FilingStatus::ALL
            .iter()
            .map(|s| OptionEntry {
                value: s.as_str(),
                label: s.label(),
            })
            .collect(),
        states: StateCode::ALL
            .iter()
            .map(|s| OptionEntry {
                value: s.code(),
                label: s.name(),
            })
            .collect(),
        withdrawal_policies: ["taxable-first", "proportional", "custom"],
        min_claim_age: MIN_CLAIM_AGE,
        max_claim_age: MAX_CLAIM_AGE,
        medicare_age: MEDICARE_AGE,
        tweak_defaults: TweakParameters::default(),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            issues: Vec::new(),
        },
    )
}

fn plan_error_response(err: PlanError) -> Response {
    let message = err.to_string();
    let issues = match err {
        PlanError::AllocationMismatch(mismatch) => vec![mismatch.into()],
        PlanError::InvalidInput(issues) => issues,
        PlanError::InvalidEnum(_) => Vec::new(),
    };
    json_response(StatusCode::BAD_REQUEST, ErrorResponse { error: message, issues })
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload =
        serde_json::from_str::<PlanPayload>(json).map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: PlanPayload) -> Result<ApiRequest, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.current_age {
        cli.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        cli.retirement_age = Some(v);
    }
    if let Some(v) = payload.target_retirement_date {
        cli.target_retirement_date = Some(v);
    }
    if let Some(v) = payload.as_of {
        cli.as_of = Some(v);
    }
    if let Some(v) = payload.life_expectancy {
        cli.life_expectancy = v;
    }
    if let Some(v) = payload.filing_status {
        cli.filing_status = v.parse::<FilingStatus>().map_err(|e| e.to_string())?.into();
    }
    if let Some(v) = payload.state {
        cli.state = v.parse::<StateCode>().map_err(|e| e.to_string())?;
    }

    if let Some(v) = payload.annual_income {
        cli.annual_income = v;
    }
    if let Some(v) = payload.annual_expenses {
        cli.annual_expenses = v;
    }
    if let Some(v) = payload.total_savings {
        cli.total_savings = v;
    }
    cli.pre_tax = payload.pre_tax;
    cli.roth = payload.roth;
    cli.post_tax = payload.post_tax;

    if let Some(v) = payload.social_security_claim_age {
        cli.social_security_claim_age = v;
    }
    if let Some(v) = payload.social_security_monthly_estimate {
        cli.social_security_monthly_estimate = v;
    }

    if let Some(v) = payload.safe_withdrawal_rate {
        cli.safe_withdrawal_rate = v;
    }
    if let Some(v) = payload.tax_bracket_inflation {
        cli.tax_bracket_inflation = v;
    }
    if let Some(v) = payload.tweak_mode {
        cli.tweak_mode = v;
    }
    if let Some(v) = payload.inflation_rate {
        cli.inflation_rate = v;
    }
    if let Some(v) = payload.investment_return {
        cli.investment_return = v;
    }
    if let Some(v) = payload.social_security_cola {
        cli.social_security_cola = v;
    }
    if let Some(v) = payload.withdrawal_policy {
        cli.withdrawal_policy = v.into();
    }
    if let Some(v) = payload.withdrawal_order {
        cli.withdrawal_order = v
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<AccountKind>().map_err(|e| e.to_string()))
            .collect::<Result<_, _>>()?;
    }
    if let Some(v) = payload.max_retirement_age {
        cli.max_retirement_age = v;
    }
    if let Some(v) = payload.healthcare_costs {
        cli.no_healthcare_costs = !v;
    }
    if let Some(v) = payload.healthcare_inflation {
        cli.healthcare_inflation = v;
    }

    let solve = RetirementAgeSolveConfig {
        max_retirement_age: cli.max_retirement_age,
    };
    let (input, tweak) = build_inputs(cli)?;
    Ok(ApiRequest { input, tweak, solve })
}

fn default_cli_for_api() -> Cli {
    Cli {
        current_age: 30,
        retirement_age: None,
        target_retirement_date: None,
        as_of: None,
        life_expectancy: 90,
        filing_status: CliFilingStatus::Single,
        state: StateCode::CA,
        annual_income: 100_000.0,
        annual_expenses: 50_000.0,
        total_savings: 100_000.0,
        pre_tax: None,
        roth: None,
        post_tax: None,
        social_security_claim_age: 67,
        social_security_monthly_estimate: 0.0,
        safe_withdrawal_rate: 4.0,
        tax_bracket_inflation: 2.5,
        tweak_mode: false,
        inflation_rate: 3.0,
        investment_return: 7.0,
        social_security_cola: 2.5,
        withdrawal_policy: CliWithdrawalPolicy::TaxableFirst,
        withdrawal_order: Vec::new(),
        max_retirement_age: 80,
        no_healthcare_costs: false,
        healthcare_inflation: 5.0,
    }
}
