//! Onboarding wizard orchestration
//!
//! Runs the three onboarding steps, shows a summary, and saves the finalized
//! plan once the student confirms.

use std::io::{BufRead, Write};

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::models::SemesterPlan;
use crate::storage::PlanStore;

use super::onboarding::OnboardingAggregator;
use super::steps::{CategoriesStep, LoanStep, ProfileStep};
use super::Prompter;

/// Result of running the onboarding wizard
pub struct SetupResult {
    /// Whether onboarding was completed and saved
    pub completed: bool,
    /// The saved plan (if any)
    pub plan: Option<SemesterPlan>,
}

impl SetupResult {
    fn cancelled() -> Self {
        Self {
            completed: false,
            plan: None,
        }
    }
}

/// The onboarding wizard
pub struct SetupWizard {
    paths: BudgetPaths,
}

impl SetupWizard {
    /// Create a new setup wizard
    pub fn new(paths: BudgetPaths) -> Self {
        Self { paths }
    }

    /// Check if onboarding is needed (first run)
    pub fn needs_setup(&self, settings: &Settings) -> bool {
        !settings.setup_completed || !self.paths.has_plan()
    }

    /// Run the interactive wizard
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        settings: &mut Settings,
    ) -> BudgetResult<SetupResult> {
        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Welcome to HELB Semester Saver!")?;
        prompter.say("===========================================")?;
        prompter.say("")?;
        prompter.say("Let's split your loan across the semester.")?;

        if !prompter.confirm("Ready to begin? (yes/no) [yes]: ", true)? {
            prompter.say("Setup cancelled.")?;
            return Ok(SetupResult::cancelled());
        }

        let profile = ProfileStep::run(prompter)?;
        let loan = LoanStep::run(prompter, &settings.date_format)?;
        let categories = CategoriesStep::run(prompter)?;

        let mut onboarding = OnboardingAggregator::new();
        onboarding
            .set_profile(profile.name, profile.age, profile.university)
            .set_loan_amount(loan.loan_amount)
            .set_semester_dates(loan.start_date, loan.end_date)
            .select_categories(categories);

        let plan = onboarding.finalize(settings)?;

        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Plan Summary")?;
        prompter.say("===========================================")?;
        prompter.say("")?;
        prompter.say(&format!(
            "Loan:       {}",
            settings.format_money(plan.total_loan_amount)
        ))?;
        prompter.say(&format!(
            "Semester:   {} to {}",
            plan.start_date.format(&settings.date_format),
            plan.end_date.format(&settings.date_format)
        ))?;
        prompter.say(&format!(
            "Allocated:  {}",
            settings.format_money(plan.total_allocated())
        ))?;
        prompter.say(&format!(
            "Remaining:  {}",
            settings.format_money(plan.remaining_funds())
        ))?;
        if plan.is_over_allocated() {
            prompter.say("Note: your allocations exceed the loan amount.")?;
        }
        prompter.say("")?;

        if !prompter.confirm("Save this plan? (yes/no) [yes]: ", true)? {
            prompter.say("Setup cancelled.")?;
            return Ok(SetupResult::cancelled());
        }

        PlanStore::new(self.paths.clone()).save(&plan)?;
        settings.setup_completed = true;
        settings.save(&self.paths)?;

        prompter.say("")?;
        prompter.say("Setup complete!")?;
        prompter.say("  - Run 'helb dashboard' to see your daily allowance")?;
        prompter.say("  - Run 'helb category list' to review allocations")?;

        Ok(SetupResult {
            completed: true,
            plan: Some(plan),
        })
    }
}
