//! # Cards Subcommand
//!
//! Credit-card CRUD against `/credit-cards`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use mynance_client::credit_cards::{CreateCreditCardRequest, UpdateCreditCardRequest};
use mynance_client::types::CardId;
use mynance_core::DueDay;

use crate::{print_json, CliContext};

/// Arguments for the `mynance cards` subcommand.
#[derive(Args, Debug)]
pub struct CardsArgs {
    #[command(subcommand)]
    pub command: CardsCommand,
}

/// Card subcommands.
#[derive(Subcommand, Debug)]
pub enum CardsCommand {
    /// List credit cards (active by default).
    List {
        /// Include deactivated cards as well.
        #[arg(long, conflicts_with = "inactive")]
        all: bool,
        /// List only deactivated cards.
        #[arg(long)]
        inactive: bool,
    },

    /// Register a new credit card.
    Add {
        /// Card display name.
        #[arg(long)]
        name: String,
        /// Issuing bank (see `mynance banks`).
        #[arg(long)]
        bank: String,
        /// Credit limit.
        #[arg(long)]
        limit: f64,
        /// Day of the month the bill falls due (1-31).
        #[arg(long)]
        due_day: u8,
    },

    /// Update an existing credit card.
    Update {
        /// Card id.
        #[arg(long)]
        id: i64,
        /// Card display name.
        #[arg(long)]
        name: String,
        /// Issuing bank.
        #[arg(long)]
        bank: String,
        /// Credit limit.
        #[arg(long)]
        limit: f64,
        /// Day of the month the bill falls due (1-31).
        #[arg(long)]
        due_day: u8,
    },

    /// Deactivate a credit card (soft-delete).
    Remove {
        /// Card id.
        #[arg(long)]
        id: i64,
    },

    /// Reactivate a previously deactivated credit card.
    Restore {
        /// Card id.
        #[arg(long)]
        id: i64,
    },
}

pub async fn run_cards(args: &CardsArgs, ctx: &CliContext) -> Result<u8> {
    let cards = ctx.client.credit_cards();
    match &args.command {
        CardsCommand::List { all, inactive } => {
            let list = if *all {
                cards.list_all().await?
            } else if *inactive {
                cards.list_inactive().await?
            } else {
                cards.list_active().await?
            };
            print_json(&list)?;
            Ok(0)
        }

        CardsCommand::Add {
            name,
            bank,
            limit,
            due_day,
        } => {
            let req = CreateCreditCardRequest {
                name: name.clone(),
                bank: bank.clone(),
                limit_amount: *limit,
                due_day: DueDay::new(*due_day).context("invalid --due-day")?,
            };
            let id = cards.create(&req).await?;
            println!("Created card {id}.");
            Ok(0)
        }

        CardsCommand::Update {
            id,
            name,
            bank,
            limit,
            due_day,
        } => {
            let req = UpdateCreditCardRequest {
                id: CardId::from_raw(*id),
                name: name.clone(),
                bank: bank.clone(),
                limit_amount: *limit,
                due_day: DueDay::new(*due_day).context("invalid --due-day")?,
            };
            cards.update(&req).await?;
            println!("Updated card {id}.");
            Ok(0)
        }

        CardsCommand::Remove { id } => {
            cards.deactivate(CardId::from_raw(*id)).await?;
            println!("Deactivated card {id}.");
            Ok(0)
        }

        CardsCommand::Restore { id } => {
            cards.reactivate(CardId::from_raw(*id)).await?;
            println!("Reactivated card {id}.");
            Ok(0)
        }
    }
}
