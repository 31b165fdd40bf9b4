use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use helb_budget::cli::{
    handle_category_command, handle_dashboard_command, handle_init_command, handle_plan_command,
    CategoryCommands, DashboardArgs, InitArgs, PlanCommands,
};
use helb_budget::config::{paths::BudgetPaths, settings::Settings, LoanAmountPolicy};
use helb_budget::setup::SetupWizard;
use helb_budget::storage::PlanStore;

#[derive(Parser)]
#[command(
    name = "helb",
    version,
    about = "Semester budgeting for HELB student loans",
    long_about = "Split your semester's HELB loan across categories, then check \
                  how much you can spend each day until the semester ends."
)]
struct Cli {
    /// Directory holding settings and the semester plan
    #[arg(long, global = true, env = "HELB_BUDGET_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the semester plan (onboarding)
    Init(InitArgs),

    /// Semester plan commands
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Category allocation commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Show balance, daily allowance and budget health
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    helb_budget::init_tracing();

    let cli = Cli::parse();

    let paths = BudgetPaths::resolve(cli.data_dir)?;
    let mut settings = Settings::load_or_create(&paths)?;
    let store = PlanStore::new(paths.clone());

    match cli.command {
        Some(Commands::Init(args)) => {
            handle_init_command(&paths, &mut settings, args)?;
        }
        Some(Commands::Plan(cmd)) => {
            handle_plan_command(&store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&store, &settings, cmd)?;
        }
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&store, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("HELB Budget Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Plan file:        {}", paths.plan_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:         {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            match settings.loan_amount_policy {
                LoanAmountPolicy::Reject => {
                    println!("  Missing loan:     reject");
                }
                LoanAmountPolicy::FallbackTo(amount) => {
                    println!("  Missing loan:     use {}", settings.format_money(amount));
                }
            }
            println!("  Setup completed:  {}", settings.setup_completed);
        }
        None => {
            println!("HELB Budget - semester loan budgeting");
            println!();
            println!("Run 'helb --help' for usage information.");
            if SetupWizard::new(paths.clone()).needs_setup(&settings) {
                println!("Run 'helb init' to set up your semester plan.");
            } else {
                println!("Run 'helb dashboard' to see today's allowance.");
            }
        }
    }

    Ok(())
}
