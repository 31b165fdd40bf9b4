//! Dashboard service
//!
//! Assembles the view-model values the dashboard renders from a plan, the
//! injected current balance and today's date.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::allowance::{balance_progress, daily_allowance, days_left, DailyAllowance};
use super::insights::{
    savings_progress, spending_in_window, top_category, MONTH_DAYS, WEEK_DAYS,
};
use crate::models::{BudgetHealth, CategoryId, Money, SemesterPlan, SpendingEntry};

/// Everything the dashboard shows about allocation and balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_loan_amount: Money,
    pub total_allocated: Money,
    pub remaining_funds: Money,
    pub allocation_progress: f64,
    pub current_balance: Money,
    pub balance_progress: f64,
    pub days_left: u32,
    pub daily_allowance: DailyAllowance,
    pub health: BudgetHealth,
}

/// Savings goal state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsGoal {
    pub current: Money,
    pub goal: Money,
}

/// Carousel cards derived from caller-supplied spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardInsights {
    pub weekly_spending: Money,
    pub monthly_spending: Money,
    pub top_category: Option<TopCategory>,
    pub savings_progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub amount: Money,
}

/// Service for dashboard metrics
pub struct DashboardService<'a> {
    plan: &'a SemesterPlan,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service over a plan
    pub fn new(plan: &'a SemesterPlan) -> Self {
        Self { plan }
    }

    /// Compute the dashboard summary for the given balance and day
    pub fn summary(&self, current_balance: Money, today: NaiveDate) -> DashboardSummary {
        let plan = self.plan;
        let days = days_left(plan.end_date, today);
        let progress = balance_progress(current_balance, plan.total_loan_amount);
        let health = BudgetHealth::classify(progress);

        debug!(
            %current_balance,
            days_left = days,
            progress,
            health = %health,
            "dashboard summary computed"
        );

        DashboardSummary {
            total_loan_amount: plan.total_loan_amount,
            total_allocated: plan.total_allocated(),
            remaining_funds: plan.remaining_funds(),
            allocation_progress: plan.allocation_progress(),
            current_balance,
            balance_progress: progress,
            days_left: days,
            daily_allowance: daily_allowance(current_balance, days),
            health,
        }
    }

    /// Compute the carousel insights for the given spending
    pub fn insights(
        &self,
        entries: &[SpendingEntry],
        today: NaiveDate,
        savings: Option<SavingsGoal>,
    ) -> DashboardInsights {
        DashboardInsights {
            weekly_spending: spending_in_window(entries, today, WEEK_DAYS),
            monthly_spending: spending_in_window(entries, today, MONTH_DAYS),
            top_category: top_category(self.plan, entries).map(|(category, amount)| {
                TopCategory {
                    id: category.id,
                    name: category.name.clone(),
                    icon: category.icon.clone(),
                    amount,
                }
            }),
            savings_progress: savings.map(|s| savings_progress(s.current, s.goal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentProfile;
    use crate::services::allowance::AllowanceStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_plan() -> SemesterPlan {
        SemesterPlan::with_default_categories(
            StudentProfile::default(),
            Money::from_units(45_000),
            date(2024, 8, 20),
            date(2024, 12, 15),
        )
    }

    #[test]
    fn test_summary_mid_semester() {
        let plan = sample_plan();
        let summary =
            DashboardService::new(&plan).summary(Money::from_units(15_200), date(2024, 10, 26));

        assert_eq!(summary.total_allocated, Money::from_units(20_000));
        assert_eq!(summary.remaining_funds, Money::from_units(25_000));
        assert_eq!(summary.days_left, 50);
        assert_eq!(summary.daily_allowance.amount, Money::from_units(304));
        assert_eq!(summary.daily_allowance.status, AllowanceStatus::Normal);
        // 15200 / 45000 ≈ 0.338
        assert_eq!(summary.health, BudgetHealth::Fair);
    }

    #[test]
    fn test_summary_after_semester_end() {
        let plan = sample_plan();
        let summary =
            DashboardService::new(&plan).summary(Money::from_units(15_200), date(2025, 1, 10));

        assert_eq!(summary.days_left, 0);
        assert_eq!(summary.daily_allowance.amount, Money::from_units(15_200));
    }

    #[test]
    fn test_summary_overdrawn() {
        let plan = sample_plan();
        let summary =
            DashboardService::new(&plan).summary(Money::from_units(-500), date(2024, 12, 10));

        assert_eq!(summary.balance_progress, 0.0);
        assert_eq!(summary.health, BudgetHealth::Critical);
        assert!(summary.daily_allowance.is_overdrawn());
        assert_eq!(summary.daily_allowance.amount, Money::from_units(-100));
    }

    #[test]
    fn test_summary_healthy() {
        let plan = sample_plan();
        let summary =
            DashboardService::new(&plan).summary(Money::from_units(32_500), date(2024, 10, 9));

        assert_eq!(summary.health, BudgetHealth::Good);
        assert_eq!(summary.days_left, 67);
    }

    #[test]
    fn test_insights() {
        let plan = sample_plan();
        let today = date(2024, 9, 30);
        let entries = vec![
            SpendingEntry::new(CategoryId::new(2), Money::from_units(4_200), today),
            SpendingEntry::new(CategoryId::new(3), Money::from_units(800), date(2024, 9, 10)),
        ];
        let insights = DashboardService::new(&plan).insights(
            &entries,
            today,
            Some(SavingsGoal {
                current: Money::from_units(3_200),
                goal: Money::from_units(5_000),
            }),
        );

        assert_eq!(insights.weekly_spending, Money::from_units(4_200));
        assert_eq!(insights.monthly_spending, Money::from_units(5_000));
        assert_eq!(insights.top_category.unwrap().name, "Food");
        assert!((insights.savings_progress.unwrap() - 0.64).abs() < 1e-9);
    }
}
