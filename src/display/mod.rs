//! Display formatting for terminal output
//!
//! Turns plans and dashboard view-models into plain text.

pub mod dashboard;
pub mod plan;

pub use dashboard::{format_dashboard, format_insights};
pub use plan::{format_allocation_totals, format_category_list, format_plan_details};
