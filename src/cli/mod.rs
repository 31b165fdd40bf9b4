//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod dashboard;
pub mod plan;

pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use plan::{handle_init_command, handle_plan_command, InitArgs, PlanCommands};
