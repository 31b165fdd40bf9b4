//! Loan step
//!
//! Collects the disbursed loan amount and the semester dates. Answers are
//! passed on unparsed; the aggregator decides what is usable.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::setup::Prompter;

/// Raw answers from the loan step
pub struct LoanStepResult {
    pub loan_amount: String,
    pub start_date: String,
    pub end_date: String,
}

/// Loan step
pub struct LoanStep;

impl LoanStep {
    /// Run the loan step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        date_format: &str,
    ) -> BudgetResult<LoanStepResult> {
        prompter.say("")?;
        prompter.say("Step 2: Your HELB Loan")?;
        prompter.say("======================")?;
        prompter.say("")?;
        prompter.say("How much was disbursed for this semester?")?;

        let loan_amount = prompter.ask("Loan amount (e.g., 45000): ")?;

        prompter.say("")?;
        prompter.say(&format!(
            "Semester dates ({} or 'August 20, 2024'):",
            date_format
        ))?;
        let start_date = prompter.ask("Semester start: ")?;
        let end_date = prompter.ask("Semester end: ")?;

        Ok(LoanStepResult {
            loan_amount,
            start_date,
            end_date,
        })
    }
}
