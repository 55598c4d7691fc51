//! # mynance CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mynance_cli::auth::{run_auth, AuthArgs};
use mynance_cli::cards::{run_cards, CardsArgs};
use mynance_cli::categories::{run_categories, CategoriesArgs};
use mynance_cli::expenses::{run_expenses, ExpensesArgs};
use mynance_cli::{build_context, print_json};

/// MyNance -- personal-finance tracking from the terminal.
#[derive(Parser, Debug)]
#[command(name = "mynance", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base address (overrides MYNANCE_API_HOST).
    #[arg(long, global = true)]
    api_host: Option<String>,

    /// Session file path (overrides MYNANCE_SESSION_FILE).
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Account and session management (login, logout, register, whoami).
    Auth(AuthArgs),

    /// List the supported bank catalog.
    Banks,

    /// Credit-card management.
    Cards(CardsArgs),

    /// Spending-category management.
    Categories(CategoriesArgs),

    /// Expense management.
    Expenses(ExpensesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let ctx = match build_context(cli.api_host.as_deref(), cli.session_file.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Auth(args) => run_auth(&args, &ctx).await,
        Commands::Banks => run_banks(&ctx).await,
        Commands::Cards(args) => run_cards(&args, &ctx).await,
        Commands::Categories(args) => run_categories(&args, &ctx).await,
        Commands::Expenses(args) => run_expenses(&args, &ctx).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run_banks(ctx: &mynance_cli::CliContext) -> anyhow::Result<u8> {
    let banks = ctx.client.banks().list().await?;
    print_json(&banks)?;
    Ok(0)
}
