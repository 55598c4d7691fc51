//! # Expenses Subcommand
//!
//! Expense CRUD against `/expenses`. Due dates are entered as
//! `YYYY-MM-DD` and sent to the backend as midnight UTC.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};

use mynance_client::expenses::{CreateExpenseRequest, UpdateExpenseRequest};
use mynance_client::types::{CategoryId, ExpenseId};

use crate::{print_json, CliContext};

/// Arguments for the `mynance expenses` subcommand.
#[derive(Args, Debug)]
pub struct ExpensesArgs {
    #[command(subcommand)]
    pub command: ExpensesCommand,
}

/// Expense subcommands.
#[derive(Subcommand, Debug)]
pub enum ExpensesCommand {
    /// List expenses.
    List,

    /// Record a new expense.
    Add {
        /// What the expense was for.
        #[arg(long)]
        description: String,
        /// Amount owed.
        #[arg(long)]
        amount: f64,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        due_date: String,
        /// Optional category id (see `mynance categories list`).
        #[arg(long)]
        category_id: Option<i64>,
    },

    /// Update an existing expense.
    Update {
        /// Expense id.
        #[arg(long)]
        id: i64,
        /// What the expense was for.
        #[arg(long)]
        description: String,
        /// Amount owed.
        #[arg(long)]
        amount: f64,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        due_date: String,
        /// Mark the expense as paid.
        #[arg(long)]
        paid: bool,
        /// Optional category id; omitting clears the category link.
        #[arg(long)]
        category_id: Option<i64>,
    },

    /// Soft-delete an expense.
    Remove {
        /// Expense id.
        #[arg(long)]
        id: i64,
    },

    /// Restore a soft-deleted expense.
    Restore {
        /// Expense id.
        #[arg(long)]
        id: i64,
    },
}

/// Parse a `YYYY-MM-DD` argument into the backend's timestamp form.
fn parse_due_date(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid --due-date {raw:?}; expected YYYY-MM-DD"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("invalid --due-date; not a representable time")?;
    Ok(midnight.and_utc())
}

pub async fn run_expenses(args: &ExpensesArgs, ctx: &CliContext) -> Result<u8> {
    let expenses = ctx.client.expenses();
    match &args.command {
        ExpensesCommand::List => {
            let list = expenses.list().await?;
            print_json(&list)?;
            Ok(0)
        }

        ExpensesCommand::Add {
            description,
            amount,
            due_date,
            category_id,
        } => {
            let req = CreateExpenseRequest {
                description: description.clone(),
                amount: *amount,
                due_date: parse_due_date(due_date)?,
                category_id: category_id.map(CategoryId::from_raw),
            };
            let id = expenses.create(&req).await?;
            println!("Created expense {id}.");
            Ok(0)
        }

        ExpensesCommand::Update {
            id,
            description,
            amount,
            due_date,
            paid,
            category_id,
        } => {
            let req = UpdateExpenseRequest {
                id: ExpenseId::from_raw(*id),
                description: description.clone(),
                amount: *amount,
                due_date: parse_due_date(due_date)?,
                paid: *paid,
                category_id: category_id.map(CategoryId::from_raw),
            };
            expenses.update(&req).await?;
            println!("Updated expense {id}.");
            Ok(0)
        }

        ExpensesCommand::Remove { id } => {
            expenses.deactivate(ExpenseId::from_raw(*id)).await?;
            println!("Removed expense {id}.");
            Ok(0)
        }

        ExpensesCommand::Restore { id } => {
            expenses.reactivate(ExpenseId::from_raw(*id)).await?;
            println!("Restored expense {id}.");
            Ok(0)
        }
    }
}
