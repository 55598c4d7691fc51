//! # Categories Subcommand
//!
//! Spending-category CRUD against `/categories`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use mynance_client::categories::{CreateCategoryRequest, UpdateCategoryRequest};
use mynance_client::types::CategoryId;
use mynance_core::HexColor;

use crate::{print_json, CliContext};

/// Arguments for the `mynance categories` subcommand.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

/// Category subcommands.
#[derive(Subcommand, Debug)]
pub enum CategoriesCommand {
    /// List categories (active by default).
    List {
        /// Include deactivated categories as well.
        #[arg(long, conflicts_with = "inactive")]
        all: bool,
        /// List only deactivated categories.
        #[arg(long)]
        inactive: bool,
    },

    /// Create a new category.
    Add {
        /// Category name.
        #[arg(long)]
        name: String,
        /// Display color as "#rrggbb".
        #[arg(long)]
        color: String,
    },

    /// Update an existing category.
    Update {
        /// Category id.
        #[arg(long)]
        id: i64,
        /// Category name.
        #[arg(long)]
        name: String,
        /// Display color as "#rrggbb".
        #[arg(long)]
        color: String,
    },

    /// Deactivate a category (soft-delete).
    Remove {
        /// Category id.
        #[arg(long)]
        id: i64,
    },

    /// Reactivate a previously deactivated category.
    Restore {
        /// Category id.
        #[arg(long)]
        id: i64,
    },
}

pub async fn run_categories(args: &CategoriesArgs, ctx: &CliContext) -> Result<u8> {
    let categories = ctx.client.categories();
    match &args.command {
        CategoriesCommand::List { all, inactive } => {
            let list = if *all {
                categories.list_all().await?
            } else if *inactive {
                categories.list_inactive().await?
            } else {
                categories.list_active().await?
            };
            print_json(&list)?;
            Ok(0)
        }

        CategoriesCommand::Add { name, color } => {
            let req = CreateCategoryRequest {
                name: name.clone(),
                color: HexColor::new(color.clone()).context("invalid --color")?,
            };
            let id = categories.create(&req).await?;
            println!("Created category {id}.");
            Ok(0)
        }

        CategoriesCommand::Update { id, name, color } => {
            let req = UpdateCategoryRequest {
                id: CategoryId::from_raw(*id),
                name: name.clone(),
                color: HexColor::new(color.clone()).context("invalid --color")?,
            };
            categories.update(&req).await?;
            println!("Updated category {id}.");
            Ok(0)
        }

        CategoriesCommand::Remove { id } => {
            categories.deactivate(CategoryId::from_raw(*id)).await?;
            println!("Deactivated category {id}.");
            Ok(0)
        }

        CategoriesCommand::Restore { id } => {
            categories.reactivate(CategoryId::from_raw(*id)).await?;
            println!("Reactivated category {id}.");
            Ok(0)
        }
    }
}
