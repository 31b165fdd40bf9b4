//! Dashboard display formatting

use crate::config::Settings;
use crate::services::{DashboardInsights, DashboardSummary};

/// Format the dashboard summary
pub fn format_dashboard(summary: &DashboardSummary, settings: &Settings) -> String {
    let money = |m| settings.format_money(m);
    let mut output = String::new();

    output.push_str(&format!(
        "Budget health:    {} [{}] ({:.0}% of loan left)\n",
        summary.health,
        summary.health.color_class(),
        summary.balance_progress * 100.0
    ));
    output.push_str(&format!("Days left:        {}\n", summary.days_left));
    output.push_str(&format!(
        "Daily allowance:  {}\n",
        money(summary.daily_allowance.amount)
    ));
    if summary.daily_allowance.is_overdrawn() {
        output.push_str("Warning: your balance is negative.\n");
    }
    output.push_str(&format!(
        "Current balance:  {}\n",
        money(summary.current_balance)
    ));
    output.push('\n');
    output.push_str(&format!(
        "Allocated:        {} of {} ({:.0}%)\n",
        money(summary.total_allocated),
        money(summary.total_loan_amount),
        summary.allocation_progress * 100.0
    ));
    output.push_str(&format!(
        "Unallocated:      {}\n",
        money(summary.remaining_funds)
    ));

    output
}

/// Format the spending insight cards
pub fn format_insights(insights: &DashboardInsights, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Spent this week:  {}\n",
        settings.format_money(insights.weekly_spending)
    ));
    output.push_str(&format!(
        "Spent this month: {}\n",
        settings.format_money(insights.monthly_spending)
    ));
    if let Some(top) = &insights.top_category {
        output.push_str(&format!(
            "Top category:     {} {} ({})\n",
            top.icon,
            top.name,
            settings.format_money(top.amount)
        ));
    }
    if let Some(progress) = insights.savings_progress {
        output.push_str(&format!(
            "Savings goal:     {:.0}% achieved\n",
            progress * 100.0
        ));
    }

    output
}
