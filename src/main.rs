use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_categories_command, handle_history_command,
    handle_list_command, handle_summary_command, run_session, today, AddArgs, BudgetCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::prompt::Prompter;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based monthly expense tracker",
    long_about = "Records expenses by category into one ledger per month, keeps a \
                  monthly budget, and summarizes spending as a share of that budget. \
                  Run without a command for the interactive session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: budget, expenses, then summary (default)
    Session,

    /// Record an expense without prompts
    Add(AddArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the spending summary for a month
    Summary {
        /// Month (e.g., "2025-06", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
        /// Also draw the pie chart
        #[arg(short, long)]
        chart: bool,
    },

    /// List the expenses recorded for a month
    #[command(alias = "ls")]
    List {
        /// Month (e.g., "2025-06", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the expense categories
    Categories,

    /// Show recent budget and expense changes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        None | Some(Commands::Session) => {
            let mut prompter = Prompter::stdio();
            run_session(&storage, &settings, &mut prompter, today())?;
        }
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Summary { month, chart }) => {
            handle_summary_command(&storage, &settings, month, chart)?
        }
        Some(Commands::List { month }) => handle_list_command(&storage, &settings, month)?,
        Some(Commands::Categories) => handle_categories_command()?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Reuse previous budget: {}", settings.reuse_previous_budget);
            println!("  Audit enabled:         {}", settings.audit_enabled);
        }
    }

    Ok(())
}
