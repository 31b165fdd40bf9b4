//! Allocation service
//!
//! Category edits on a semester plan. Every operation borrows the current plan
//! and hands back an updated copy, so a rejected edit never touches the
//! caller's state.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryId, Money, SemesterPlan};

/// Service for category allocation management
pub struct AllocationService<'a> {
    plan: &'a SemesterPlan,
}

impl<'a> AllocationService<'a> {
    /// Create a new allocation service over a plan
    pub fn new(plan: &'a SemesterPlan) -> Self {
        Self { plan }
    }

    /// Replace a category's allocated amount
    pub fn set_allocation(&self, id: CategoryId, amount: Money) -> BudgetResult<SemesterPlan> {
        if amount.is_negative() {
            warn!(category = %id, %amount, "rejected negative allocation");
            return Err(BudgetError::InvalidAmount(amount));
        }

        let index = self.index_of(id)?;
        let mut plan = self.plan.clone();
        let category = &mut plan.categories[index];
        let before = category.allocated;
        category.allocated = amount;

        info!(
            category = %id,
            name = %category.name,
            %before,
            after = %amount,
            "allocation updated"
        );

        Ok(plan)
    }

    /// Flip a category between active and inactive
    pub fn toggle_active(&self, id: CategoryId) -> BudgetResult<SemesterPlan> {
        let index = self.index_of(id)?;
        let mut plan = self.plan.clone();
        let category = &mut plan.categories[index];
        category.is_active = !category.is_active;

        info!(
            category = %id,
            name = %category.name,
            active = category.is_active,
            "category toggled"
        );

        Ok(plan)
    }

    /// Add a custom category under the next free id
    pub fn add_category(
        &self,
        name: &str,
        icon: &str,
        initial_amount: Money,
    ) -> BudgetResult<(SemesterPlan, CategoryId)> {
        if initial_amount.is_negative() {
            warn!(name, amount = %initial_amount, "rejected negative initial allocation");
            return Err(BudgetError::InvalidAmount(initial_amount));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::Validation("Category name cannot be empty".into()));
        }

        if self.plan.active_category_by_name(name).is_some() {
            warn!(name, "rejected duplicate category name");
            return Err(BudgetError::DuplicateName(name.to_string()));
        }

        let mut plan = self.plan.clone();
        let id = plan
            .push_category(name, icon.trim(), initial_amount)
            .map_err(|e| {
                warn!(name, "rejected category: {}", e);
                BudgetError::Validation(e.to_string())
            })?;

        if let Some(category) = plan.category(id) {
            category
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;
        }

        info!(category = %id, name, amount = %initial_amount, "category added");

        Ok((plan, id))
    }

    fn index_of(&self, id: CategoryId) -> BudgetResult<usize> {
        self.plan
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))
    }
}
