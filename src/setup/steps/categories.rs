//! Categories step
//!
//! Walks through the default categories, then lets the student add their own.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::models::Money;
use crate::setup::onboarding::{default_selections, CategorySelection};
use crate::setup::Prompter;

/// Categories step
pub struct CategoriesStep;

impl CategoriesStep {
    /// Run the categories step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
    ) -> BudgetResult<Vec<CategorySelection>> {
        prompter.say("")?;
        prompter.say("Step 3: Budget Categories")?;
        prompter.say("=========================")?;
        prompter.say("")?;
        prompter.say("Press enter to keep the suggested amount.")?;

        let mut selections = Vec::new();

        for mut row in default_selections() {
            prompter.say("")?;
            row.is_selected = prompter.confirm(
                &format!("Include {} {}? (yes/no) [yes]: ", row.icon, row.name),
                true,
            )?;
            if row.is_selected {
                row.amount = Self::ask_amount(prompter, &row.name, row.amount)?;
            }
            selections.push(row);
        }

        prompter.say("")?;
        loop {
            let name = prompter.ask("Add a custom category (blank to finish): ")?;
            if name.is_empty() {
                break;
            }
            let icon = prompter.ask("Icon (optional): ")?;
            let amount = Self::ask_amount(prompter, &name, Money::zero())?;
            selections.push(CategorySelection::new(name, icon, amount));
        }

        Ok(selections)
    }

    /// Ask for an amount until it parses, keeping `suggested` on a blank answer
    fn ask_amount<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        name: &str,
        suggested: Money,
    ) -> BudgetResult<Money> {
        loop {
            let answer = prompter.ask(&format!(
                "Amount for {} [{}]: ",
                name,
                suggested.units()
            ))?;
            if answer.is_empty() {
                return Ok(suggested);
            }
            match Money::parse(&answer) {
                Ok(amount) if !amount.is_negative() => return Ok(amount),
                _ => prompter.say("Please enter a non-negative amount, e.g. 4000")?,
            }
        }
    }
}
