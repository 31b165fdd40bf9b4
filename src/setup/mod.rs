//! First-run onboarding
//!
//! The aggregator turns raw onboarding input into a semester plan; the wizard
//! collects that input interactively on the terminal.

pub mod onboarding;
pub mod steps;
pub mod wizard;

pub use onboarding::{default_selections, CategorySelection, OnboardingAggregator};
pub use wizard::{SetupResult, SetupWizard};

use std::io::{BufRead, Write};

use crate::error::BudgetResult;

/// Line-oriented prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> BudgetResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt for a string input; end of input reads as an empty answer
    pub fn ask(&mut self, prompt: &str) -> BudgetResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(line.trim().to_string())
    }

    /// Prompt for a yes/no answer; blank means `default`
    pub fn confirm(&mut self, prompt: &str, default: bool) -> BudgetResult<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_and_confirm() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("  Wanjiru \n\nno\n"), &mut out);

        assert_eq!(prompter.ask("Name: ").unwrap(), "Wanjiru");
        assert!(prompter.confirm("Continue? ", true).unwrap());
        assert!(!prompter.confirm("Continue? ", true).unwrap());
        // Exhausted input behaves like pressing enter
        assert_eq!(prompter.ask("More: ").unwrap(), "");

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Name: "));
    }
}
