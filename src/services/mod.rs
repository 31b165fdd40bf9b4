//! Service layer
//!
//! Business logic on top of the semester plan model: category edits, the
//! allowance calculator and the dashboard view-model.

pub mod allocation;
pub mod allowance;
pub mod dashboard;
pub mod insights;

pub use allocation::AllocationService;
pub use allowance::{balance_progress, daily_allowance, days_left, AllowanceStatus, DailyAllowance};
pub use dashboard::{DashboardInsights, DashboardService, DashboardSummary, SavingsGoal};
