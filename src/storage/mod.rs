//! Storage layer
//!
//! Keeps the current semester plan in a single JSON file. Spending entries
//! are never written to disk.

pub mod file_io;

pub use file_io::{read_json_optional, write_json_atomic};

use tracing::debug;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::SemesterPlan;

/// Loads and saves the current semester plan
pub struct PlanStore {
    paths: BudgetPaths,
}

impl PlanStore {
    /// Create a new PlanStore
    pub fn new(paths: BudgetPaths) -> Self {
        Self { paths }
    }

    /// Load the plan if one has been saved
    pub fn load(&self) -> BudgetResult<Option<SemesterPlan>> {
        let plan: Option<SemesterPlan> = read_json_optional(self.paths.plan_file())?;

        if let Some(plan) = &plan {
            plan.validate().map_err(|e| {
                BudgetError::Storage(format!(
                    "Stored plan at {} is invalid: {}",
                    self.paths.plan_file().display(),
                    e
                ))
            })?;
            debug!(categories = plan.categories.len(), "plan loaded");
        }

        Ok(plan)
    }

    /// Load the plan, failing if onboarding hasn't produced one yet
    pub fn load_required(&self) -> BudgetResult<SemesterPlan> {
        self.load()?.ok_or_else(|| {
            BudgetError::plan_not_found(format!(
                "{} (run 'helb init' first)",
                self.paths.plan_file().display()
            ))
        })
    }

    /// Save the plan, replacing any previous one
    pub fn save(&self, plan: &SemesterPlan) -> BudgetResult<()> {
        plan.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.paths.ensure_directories()?;

        let path = self.paths.plan_file();
        write_json_atomic(&path, plan)?;
        debug!(path = %path.display(), "plan saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, StudentProfile};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_plan() -> SemesterPlan {
        SemesterPlan::with_default_categories(
            StudentProfile {
                name: "Wanjiru".into(),
                age: "20".into(),
                university: "University of Nairobi".into(),
            },
            Money::from_units(45_000),
            NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        )
    }

    #[test]
    fn test_load_without_plan() {
        let temp_dir = TempDir::new().unwrap();
        let store = PlanStore::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf()));

        assert!(store.load().unwrap().is_none());
        assert!(store.load_required().unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = PlanStore::new(paths.clone());
        let plan = sample_plan();

        store.save(&plan).unwrap();

        assert!(paths.has_plan());
        assert_eq!(store.load_required().unwrap(), plan);
    }

    #[test]
    fn test_save_rejects_invalid_plan() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = PlanStore::new(paths.clone());
        let mut plan = sample_plan();
        plan.end_date = plan.start_date;

        assert!(store.save(&plan).unwrap_err().is_validation());
        assert!(!paths.has_plan());
    }
}
