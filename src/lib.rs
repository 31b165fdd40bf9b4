//! HELB Budget - semester budgeting for student loan disbursements
//!
//! This library splits a semester's HELB loan across spending categories,
//! derives remaining funds and a daily spending allowance, and classifies
//! budget health for the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (plan, categories, money, health)
//! - `services`: Allocation edits, allowance math and dashboard metrics
//! - `setup`: Onboarding aggregation and the interactive wizard
//! - `storage`: JSON file storage for the current plan
//! - `display` / `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use helb_budget::models::{CategoryId, Money, SemesterPlan, StudentProfile};
//! use helb_budget::services::AllocationService;
//!
//! let plan = SemesterPlan::with_default_categories(
//!     StudentProfile::default(),
//!     Money::from_units(45_000),
//!     NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
//! );
//! assert_eq!(plan.remaining_funds(), Money::from_units(25_000));
//!
//! let plan = AllocationService::new(&plan)
//!     .toggle_active(CategoryId::new(1))
//!     .unwrap();
//! assert_eq!(plan.remaining_funds(), Money::from_units(33_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber once.
///
/// Logs go to stderr; `RUST_LOG` overrides the default `helb_budget=warn`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("helb_budget=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
