//! Dashboard CLI command
//!
//! Prints balance, allowance and health for the stored plan. The balance and
//! any spending are passed on the command line; nothing here is saved.

use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use super::category::{parse_amount, resolve_category};
use crate::config::Settings;
use crate::display::dashboard::{format_dashboard, format_insights};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, SemesterPlan, SpendingEntry};
use crate::services::{DashboardInsights, DashboardService, DashboardSummary, SavingsGoal};
use crate::setup::onboarding::parse_date;
use crate::storage::PlanStore;

/// Dashboard arguments
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Current balance (defaults to the full loan amount)
    #[arg(short, long)]
    pub balance: Option<String>,

    /// Date to compute for (defaults to today)
    #[arg(short, long)]
    pub today: Option<String>,

    /// Spending as CATEGORY=AMOUNT, dated today; repeatable
    #[arg(short, long = "spent", value_name = "CATEGORY=AMOUNT")]
    pub spent: Vec<String>,

    /// Amount saved so far
    #[arg(long, requires = "savings_goal")]
    pub savings: Option<String>,

    /// Savings target
    #[arg(long)]
    pub savings_goal: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DashboardOutput {
    summary: DashboardSummary,
    insights: DashboardInsights,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    store: &PlanStore,
    settings: &Settings,
    args: DashboardArgs,
) -> BudgetResult<()> {
    let plan = store.load_required()?;

    let today = match args.today.as_deref() {
        Some(raw) => parse_date(raw, &settings.date_format)
            .ok_or_else(|| BudgetError::Validation(format!("Invalid date: {}", raw)))?,
        None => Local::now().date_naive(),
    };

    let balance = match args.balance.as_deref() {
        Some(raw) => parse_amount(raw)?,
        None => plan.total_loan_amount,
    };

    let entries = parse_spending(&plan, &args.spent, today)?;

    let savings = match (args.savings.as_deref(), args.savings_goal.as_deref()) {
        (current, Some(goal)) => Some(SavingsGoal {
            current: current.map(parse_amount).transpose()?.unwrap_or_default(),
            goal: parse_amount(goal)?,
        }),
        _ => None,
    };

    let service = DashboardService::new(&plan);
    let summary = service.summary(balance, today);
    let insights = service.insights(&entries, today, savings);

    if args.json {
        let output = DashboardOutput { summary, insights };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", format_dashboard(&summary, settings));
    if !entries.is_empty() || insights.savings_progress.is_some() {
        println!();
        print!("{}", format_insights(&insights, settings));
    }

    Ok(())
}

/// Parse `CATEGORY=AMOUNT` pairs into spending entries dated `today`
fn parse_spending(
    plan: &SemesterPlan,
    pairs: &[String],
    today: NaiveDate,
) -> BudgetResult<Vec<SpendingEntry>> {
    pairs
        .iter()
        .map(|pair| {
            let (category, amount) = pair.split_once('=').ok_or_else(|| {
                BudgetError::Validation(format!("Expected CATEGORY=AMOUNT, got '{}'", pair))
            })?;
            let amount: Money = parse_amount(amount)?;
            if amount.is_negative() {
                return Err(BudgetError::InvalidAmount(amount));
            }
            Ok(SpendingEntry::new(
                resolve_category(plan, category.trim())?,
                amount,
                today,
            ))
        })
        .collect()
}
