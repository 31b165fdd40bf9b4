//! Category CLI commands
//!
//! Implements CLI commands for viewing and editing category allocations.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::plan::{format_allocation_totals, format_category_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryId, Money, SemesterPlan};
use crate::services::AllocationService;
use crate::storage::PlanStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their allocations
    List,

    /// Set the amount allocated to a category
    Set {
        /// Category ID (e.g. "3" or "#3") or name
        category: String,
        /// New allocation (e.g. "4000" or "4,000.50")
        amount: String,
    },

    /// Switch a category between active and inactive
    Toggle {
        /// Category ID or name
        category: String,
    },

    /// Add a custom category
    Add {
        /// Category name
        name: String,
        /// Display icon
        #[arg(short, long, default_value = "")]
        icon: String,
        /// Initial allocation
        #[arg(short, long, default_value = "0")]
        amount: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    store: &PlanStore,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let plan = store.load_required()?;
    let service = AllocationService::new(&plan);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&plan, settings));
        }

        CategoryCommands::Set { category, amount } => {
            let id = resolve_category(&plan, &category)?;
            let amount = parse_amount(&amount)?;
            let updated = service.set_allocation(id, amount)?;
            store.save(&updated)?;

            if let Some(cat) = updated.category(id) {
                println!(
                    "Set {} to {}",
                    cat.name,
                    settings.format_money(cat.allocated)
                );
            }
            print!("{}", format_allocation_totals(&updated, settings));
        }

        CategoryCommands::Toggle { category } => {
            let id = resolve_category(&plan, &category)?;
            let updated = service.toggle_active(id)?;
            store.save(&updated)?;

            if let Some(cat) = updated.category(id) {
                let state = if cat.is_active { "active" } else { "inactive" };
                println!("{} is now {}", cat.name, state);
            }
            print!("{}", format_allocation_totals(&updated, settings));
        }

        CategoryCommands::Add { name, icon, amount } => {
            let amount = parse_amount(&amount)?;
            let (updated, id) = service.add_category(&name, &icon, amount)?;
            store.save(&updated)?;

            println!("Added category: {}", name.trim());
            println!("  ID: {}", id);
            print!("{}", format_allocation_totals(&updated, settings));
        }
    }

    Ok(())
}

/// Find a category by ID, or by name (active categories win over inactive ones)
pub fn resolve_category(plan: &SemesterPlan, identifier: &str) -> BudgetResult<CategoryId> {
    if let Ok(id) = identifier.parse::<CategoryId>() {
        if plan.category(id).is_some() {
            return Ok(id);
        }
    }

    plan.active_category_by_name(identifier)
        .or_else(|| plan.categories.iter().find(|c| c.has_name(identifier)))
        .map(|c| c.id)
        .ok_or_else(|| BudgetError::category_not_found(identifier))
}

/// Parse a user-supplied amount
pub fn parse_amount(raw: &str) -> BudgetResult<Money> {
    Money::parse(raw).map_err(|e| BudgetError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentProfile;
    use chrono::NaiveDate;

    fn sample_plan() -> SemesterPlan {
        SemesterPlan::with_default_categories(
            StudentProfile::default(),
            Money::from_units(45_000),
            NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        )
    }

    #[test]
    fn test_resolve_category() {
        let plan = sample_plan();

        assert_eq!(resolve_category(&plan, "3").unwrap(), CategoryId::new(3));
        assert_eq!(resolve_category(&plan, "#3").unwrap(), CategoryId::new(3));
        assert_eq!(resolve_category(&plan, "food").unwrap(), CategoryId::new(2));
        assert!(resolve_category(&plan, "Gym").unwrap_err().is_not_found());
        assert!(resolve_category(&plan, "42").unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_prefers_active_name() {
        let plan = sample_plan();
        let plan = AllocationService::new(&plan)
            .toggle_active(CategoryId::new(2))
            .unwrap();
        // Inactive categories are still reachable by name
        assert_eq!(resolve_category(&plan, "Food").unwrap(), CategoryId::new(2));

        let (plan, new_id) = AllocationService::new(&plan)
            .add_category("Food", "", Money::zero())
            .unwrap();
        assert_eq!(resolve_category(&plan, "Food").unwrap(), new_id);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4,000").unwrap(), Money::from_units(4_000));
        assert!(parse_amount("lots").unwrap_err().is_validation());
    }
}
