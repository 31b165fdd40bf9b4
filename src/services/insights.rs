//! Spending insights
//!
//! Rolling spend totals, the top spending category and savings-goal progress
//! for the dashboard carousel. Entries come from the caller.

use chrono::{Duration, NaiveDate};

use crate::models::{Category, Money, SemesterPlan, SpendingEntry};

/// Window length for the weekly spending card
pub const WEEK_DAYS: u32 = 7;

/// Window length for the monthly spending card
pub const MONTH_DAYS: u32 = 30;

/// Total spent in the `days`-day window ending on `today` (inclusive)
pub fn spending_in_window(entries: &[SpendingEntry], today: NaiveDate, days: u32) -> Money {
    if days == 0 {
        return Money::zero();
    }
    // Windows reaching past the calendar's start cover everything up to today
    let first_day = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);

    entries
        .iter()
        .filter(|e| e.date >= first_day && e.date <= today)
        .map(|e| e.amount)
        .sum()
}

/// The category with the largest total spend.
///
/// Ties go to the category listed first. Returns `None` when nothing positive
/// was spent against a known category.
pub fn top_category<'a>(
    plan: &'a SemesterPlan,
    entries: &[SpendingEntry],
) -> Option<(&'a Category, Money)> {
    let mut best: Option<(&Category, Money)> = None;

    for category in &plan.categories {
        let spent: Money = entries
            .iter()
            .filter(|e| e.category_id == category.id)
            .map(|e| e.amount)
            .sum();

        if !spent.is_positive() {
            continue;
        }

        match best {
            Some((_, top)) if top >= spent => {}
            _ => best = Some((category, spent)),
        }
    }

    best
}

/// Progress toward a savings goal, clamped to [0, 1]; 0 when the goal is 0
pub fn savings_progress(current_savings: Money, goal: Money) -> f64 {
    current_savings
        .ratio_to(goal)
        .map(|r| r.clamp(0.0, 1.0))
        .unwrap_or(0.0)
}
