mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::applications::{
    AddNoteArgs, ApplicationArgs, ApplicationsArgs, SetStatusArgs, StatsArgs, SubmitArgs,
};
use commands::schedule::ScheduleArgs;
use commands::transactions::{RecordTransactionArgs, TransactionsArgs};

/// Loan-origination workbench over the seeded demo backend
#[derive(Parser)]
#[command(
    name = "lw",
    version,
    about = "Loan-origination workbench",
    long_about = "A CLI for the LendWise origination backend. Computes repayment \
                  schedules with decimal precision and drives the application, \
                  user, and transaction operations against the seeded in-memory \
                  store the web client ships with."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a fixed-rate repayment schedule
    Schedule(ScheduleArgs),
    /// List applications, optionally filtered
    Applications(ApplicationsArgs),
    /// Show one application (optionally with its schedule)
    Application(ApplicationArgs),
    /// Submit an intake draft
    Submit(SubmitArgs),
    /// Move an application to a new status
    SetStatus(SetStatusArgs),
    /// Attach a reviewer note to an application
    AddNote(AddNoteArgs),
    /// Application counts by status
    Stats(StatsArgs),
    /// List users
    Users,
    /// List transactions, optionally by user or loan
    Transactions(TransactionsArgs),
    /// Record a ledger transaction
    RecordTransaction(RecordTransactionArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Applications(args) => commands::applications::run_list(args),
        Commands::Application(args) => commands::applications::run_show(args),
        Commands::Submit(args) => commands::applications::run_submit(args),
        Commands::SetStatus(args) => commands::applications::run_set_status(args),
        Commands::AddNote(args) => commands::applications::run_add_note(args),
        Commands::Stats(args) => commands::applications::run_stats(args),
        Commands::Users => commands::users::run_users(),
        Commands::Transactions(args) => commands::transactions::run_list(args),
        Commands::RecordTransaction(args) => commands::transactions::run_record(args),
        Commands::Version => {
            println!("lw {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
