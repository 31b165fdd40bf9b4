//! Plan CLI commands
//!
//! Creating the semester plan (onboarding) and showing it.

use std::io;

use clap::{Args, Subcommand};

use crate::config::{BudgetPaths, Settings};
use crate::display::plan::format_plan_details;
use crate::error::{BudgetError, BudgetResult};
use crate::setup::{OnboardingAggregator, Prompter, SetupWizard};
use crate::storage::PlanStore;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the plan with its categories and totals
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Onboarding arguments; with no loan details the wizard runs interactively
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Your name
    #[arg(long)]
    pub name: Option<String>,

    /// Your age
    #[arg(long)]
    pub age: Option<String>,

    /// Your university
    #[arg(long)]
    pub university: Option<String>,

    /// Loan amount disbursed for the semester
    #[arg(short, long)]
    pub loan: Option<String>,

    /// Semester start date
    #[arg(long)]
    pub start: Option<String>,

    /// Semester end date
    #[arg(long)]
    pub end: Option<String>,

    /// Always run the interactive wizard
    #[arg(
        short,
        long,
        conflicts_with_all = ["name", "age", "university", "loan", "start", "end"]
    )]
    pub interactive: bool,

    /// Replace an existing plan
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    fn has_loan_details(&self) -> bool {
        self.loan.is_some() || self.start.is_some() || self.end.is_some()
    }
}

/// Handle a plan command
pub fn handle_plan_command(
    store: &PlanStore,
    settings: &Settings,
    cmd: PlanCommands,
) -> BudgetResult<()> {
    match cmd {
        PlanCommands::Show { json } => {
            let plan = store.load_required()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", format_plan_details(&plan, settings));
            }
        }
    }

    Ok(())
}

/// Handle `init`: run onboarding and save the resulting plan
pub fn handle_init_command(
    paths: &BudgetPaths,
    settings: &mut Settings,
    args: InitArgs,
) -> BudgetResult<()> {
    if paths.has_plan() && !args.force {
        return Err(BudgetError::Validation(
            "A semester plan already exists. Use --force to replace it.".into(),
        ));
    }

    if args.interactive || !args.has_loan_details() {
        let wizard = SetupWizard::new(paths.clone());
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        wizard.run(&mut prompter, settings)?;
        return Ok(());
    }

    let mut onboarding = OnboardingAggregator::new();
    onboarding.set_profile(
        args.name.unwrap_or_default(),
        args.age.unwrap_or_default(),
        args.university.unwrap_or_default(),
    );
    if let Some(loan) = args.loan {
        onboarding.set_loan_amount(loan);
    }
    onboarding.set_semester_dates(args.start.unwrap_or_default(), args.end.unwrap_or_default());

    let plan = onboarding.finalize(settings)?;
    PlanStore::new(paths.clone()).save(&plan)?;
    settings.setup_completed = true;
    settings.save(paths)?;

    println!("Semester plan created at: {}", paths.plan_file().display());
    println!();
    print!("{}", format_plan_details(&plan, settings));

    Ok(())
}
