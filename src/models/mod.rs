//! Core data models
//!
//! This module contains the data structures of the semester budgeting
//! domain: the plan, its categories, money amounts and health states.

pub mod category;
pub mod health;
pub mod ids;
pub mod money;
pub mod plan;
pub mod spending;

pub use category::{Category, CategoryValidationError, DefaultCategory};
pub use health::{classify, BudgetHealth};
pub use ids::CategoryId;
pub use money::{Money, MoneyParseError};
pub use plan::{PlanValidationError, SemesterPlan, StudentProfile};
pub use spending::SpendingEntry;
