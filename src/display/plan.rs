//! Plan and category display formatting
//!
//! Formats the semester plan and its categories for terminal output.

use crate::config::Settings;
use crate::models::{Category, SemesterPlan};

/// Format the category table with allocation totals underneath
pub fn format_category_list(plan: &SemesterPlan, settings: &Settings) -> String {
    if plan.categories.is_empty() {
        return "No categories found.\n\nRun 'helb category add' to create one.\n".to_string();
    }

    let name_width = plan
        .categories
        .iter()
        .map(|c| c.to_string().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4}  {:<width$}  {:>14}  {}\n",
        "ID",
        "Category",
        "Allocated",
        "Status",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<4}  {:-<width$}  {:->14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in &plan.categories {
        output.push_str(&format_category_row(category, settings, name_width));
    }

    output.push('\n');
    output.push_str(&format_allocation_totals(plan, settings));
    output
}

fn format_category_row(category: &Category, settings: &Settings, width: usize) -> String {
    let label = category.to_string();
    let pad = width.saturating_sub(label.chars().count());
    format!(
        "{:<4}  {}{}  {:>14}  {}\n",
        category.id.to_string(),
        label,
        " ".repeat(pad),
        settings.format_money(category.allocated),
        if category.is_active { "active" } else { "inactive" }
    )
}

/// Format allocated/remaining totals
pub fn format_allocation_totals(plan: &SemesterPlan, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total loan:  {}\n",
        settings.format_money(plan.total_loan_amount)
    ));
    output.push_str(&format!(
        "Allocated:   {} ({:.0}%)\n",
        settings.format_money(plan.total_allocated()),
        plan.allocation_progress() * 100.0
    ));
    output.push_str(&format!(
        "Remaining:   {}\n",
        settings.format_money(plan.remaining_funds())
    ));
    if plan.is_over_allocated() {
        output.push_str("Warning: allocations exceed the loan amount.\n");
    }
    output
}

/// Format the plan header
pub fn format_plan_details(plan: &SemesterPlan, settings: &Settings) -> String {
    let mut output = String::new();

    if !plan.profile.name.is_empty() {
        output.push_str(&format!("Student:     {}\n", plan.profile.name));
    }
    if !plan.profile.university.is_empty() {
        output.push_str(&format!("University:  {}\n", plan.profile.university));
    }
    output.push_str(&format!(
        "Semester:    {} to {} ({} days)\n",
        plan.start_date.format(&settings.date_format),
        plan.end_date.format(&settings.date_format),
        plan.semester_length_days()
    ));
    output.push('\n');
    output.push_str(&format_category_list(plan, settings));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, StudentProfile};
    use chrono::NaiveDate;

    fn sample_plan() -> SemesterPlan {
        SemesterPlan::with_default_categories(
            StudentProfile {
                name: "Wanjiru".into(),
                ..StudentProfile::default()
            },
            Money::from_units(45_000),
            NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        )
    }

    #[test]
    fn test_category_list() {
        let mut plan = sample_plan();
        plan.categories[0].is_active = false;
        let output = format_category_list(&plan, &Settings::default());

        assert!(output.contains("Accommodation"));
        assert!(output.contains("inactive"));
        assert!(output.contains("Allocated:   KES 12000.00 (27%)"));
        assert!(output.contains("Remaining:   KES 33000.00"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_over_allocation_warning() {
        let mut plan = sample_plan();
        plan.categories[1].allocated = Money::from_units(50_000);
        let output = format_allocation_totals(&plan, &Settings::default());

        assert!(output.contains("Remaining:   -KES 25000.00"));
        assert!(output.contains("Warning"));
    }

    #[test]
    fn test_plan_details() {
        let output = format_plan_details(&sample_plan(), &Settings::default());
        assert!(output.starts_with("Student:     Wanjiru\n"));
        assert!(output.contains("2024-08-20 to 2024-12-15 (117 days)"));
    }

    #[test]
    fn test_empty_plan() {
        let mut plan = sample_plan();
        plan.categories.clear();
        assert!(format_category_list(&plan, &Settings::default()).starts_with("No categories"));
    }
}
