//! Onboarding wizard steps
//!
//! Individual screens of the onboarding flow.

pub mod categories;
pub mod loan;
pub mod profile;

pub use categories::CategoriesStep;
pub use loan::{LoanStep, LoanStepResult};
pub use profile::ProfileStep;
