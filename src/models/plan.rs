//! Semester plan model
//!
//! The root aggregate: one loan disbursement, the semester it covers, and the
//! categories it is divided across. Totals are recomputed from the category
//! list on every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, DefaultCategory};
use super::ids::CategoryId;
use super::money::Money;

/// Profile details captured during onboarding and carried along untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub age: String,

    #[serde(default)]
    pub university: String,
}

/// A budgeting period scoped to one loan disbursement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterPlan {
    /// Who the plan belongs to
    #[serde(default)]
    pub profile: StudentProfile,

    /// Disbursed amount for the semester; fixed once the plan exists
    pub total_loan_amount: Money,

    /// First day of the semester
    pub start_date: NaiveDate,

    /// Last day of the semester
    pub end_date: NaiveDate,

    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Next id to hand out; ids are never reused
    pub next_category_id: CategoryId,
}

impl SemesterPlan {
    /// Create a plan with no categories
    pub fn new(
        profile: StudentProfile,
        total_loan_amount: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            profile,
            total_loan_amount,
            start_date,
            end_date,
            categories: Vec::new(),
            next_category_id: CategoryId::new(1),
        }
    }

    /// Create a plan seeded with the default category set
    pub fn with_default_categories(
        profile: StudentProfile,
        total_loan_amount: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let mut plan = Self::new(profile, total_loan_amount, start_date, end_date);
        plan.categories = DefaultCategory::all()
            .iter()
            .zip(1u32..)
            .map(|(default, id)| {
                Category::new(
                    CategoryId::new(id),
                    default.name(),
                    default.icon(),
                    default.suggested_amount(),
                )
            })
            .collect();
        plan.next_category_id = CategoryId::new(plan.categories.len() as u32 + 1);
        plan
    }

    /// Append a category under the next free id and return that id.
    ///
    /// No validation happens here; callers check names and amounts first.
    /// Fails without touching the plan when the id counter cannot advance.
    pub(crate) fn push_category(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        allocated: Money,
    ) -> Result<CategoryId, PlanValidationError> {
        let id = self.next_category_id;
        let next = id.next().ok_or(PlanValidationError::IdSpaceExhausted)?;
        self.categories.push(Category::new(id, name, icon, allocated));
        self.next_category_id = next;
        Ok(id)
    }

    /// Get a category by ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find an active category by name (case-insensitive)
    pub fn active_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.is_active && c.has_name(name))
    }

    /// Iterate over the categories that count toward totals
    pub fn active_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_active)
    }

    /// Sum of allocations over active categories
    pub fn total_allocated(&self) -> Money {
        self.active_categories().map(|c| c.allocated).sum()
    }

    /// Loan amount not yet allocated; negative when over-allocated
    pub fn remaining_funds(&self) -> Money {
        self.total_loan_amount - self.total_allocated()
    }

    /// Share of the loan that has been allocated, clamped to [0, 1]
    pub fn allocation_progress(&self) -> f64 {
        self.total_allocated()
            .ratio_to(self.total_loan_amount)
            .map(|r| r.clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    /// Whether allocations exceed the loan
    pub fn is_over_allocated(&self) -> bool {
        self.remaining_funds().is_negative()
    }

    /// Number of days from the first to the last day of the semester
    pub fn semester_length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Validate the plan
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.total_loan_amount.is_negative() {
            return Err(PlanValidationError::NegativeLoanAmount);
        }

        if self.end_date <= self.start_date {
            return Err(PlanValidationError::EndNotAfterStart {
                start: self.start_date,
                end: self.end_date,
            });
        }

        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.id == category.id) {
                return Err(PlanValidationError::DuplicateCategoryId(category.id));
            }
            if category.id >= self.next_category_id {
                return Err(PlanValidationError::StaleIdCounter(category.id));
            }
        }

        Ok(())
    }
}

/// Validation errors for semester plans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    NegativeLoanAmount,
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
    DuplicateCategoryId(CategoryId),
    StaleIdCounter(CategoryId),
    IdSpaceExhausted,
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLoanAmount => write!(f, "Loan amount cannot be negative"),
            Self::EndNotAfterStart { start, end } => write!(
                f,
                "Semester end date {} must be after start date {}",
                end, start
            ),
            Self::DuplicateCategoryId(id) => write!(f, "Category id {} is used twice", id),
            Self::StaleIdCounter(id) => {
                write!(f, "Category id {} is not below the id counter", id)
            }
            Self::IdSpaceExhausted => write!(f, "No category ids left to assign"),
        }
    }
}

impl std::error::Error for PlanValidationError {}
