//! Profile step
//!
//! Collects the student's name, age and university. None of it feeds the
//! budget numbers; it is stored with the plan as given.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::models::StudentProfile;
use crate::setup::Prompter;

/// Profile step
pub struct ProfileStep;

impl ProfileStep {
    /// Run the profile step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
    ) -> BudgetResult<StudentProfile> {
        prompter.say("")?;
        prompter.say("Step 1: About You")?;
        prompter.say("=================")?;
        prompter.say("")?;

        let name = prompter.ask("Your name: ")?;
        let age = prompter.ask("Age: ")?;
        let university = prompter.ask("University: ")?;

        Ok(StudentProfile {
            name,
            age,
            university,
        })
    }
}
