//! Configuration module
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The loan amount fallback policy

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{LoanAmountPolicy, Settings};
