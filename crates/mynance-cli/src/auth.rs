//! # Auth Subcommand
//!
//! Account and session management.
//!
//! ## Subcommands
//!
//! - `login` -- Authenticate and store the session token.
//! - `logout` -- End the session on the backend and drop the local token.
//! - `register` -- Create an account (log in separately afterwards).
//! - `whoami` -- Show the logged-in user's profile.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use mynance_client::auth::{Credentials, RegisterRequest};

use crate::{print_json, session, CliContext};

/// Arguments for the `mynance auth` subcommand.
#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands.
#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Authenticate and store the session token in the session file.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password. Falls back to MYNANCE_PASSWORD when omitted,
        /// keeping the secret out of shell history.
        #[arg(long)]
        password: Option<String>,
    },

    /// End the session on the backend and remove the session file.
    Logout,

    /// Create a new account.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password. Falls back to MYNANCE_PASSWORD when omitted.
        #[arg(long)]
        password: Option<String>,
    },

    /// Show the logged-in user's profile.
    Whoami,
}

/// Resolve the password from the flag or MYNANCE_PASSWORD.
fn resolve_password(flag: Option<String>) -> Result<String> {
    if let Some(password) = flag {
        return Ok(password);
    }
    match std::env::var("MYNANCE_PASSWORD") {
        Ok(password) if !password.is_empty() => Ok(password),
        _ => bail!("no password given; pass --password or set MYNANCE_PASSWORD"),
    }
}

pub async fn run_auth(args: &AuthArgs, ctx: &CliContext) -> Result<u8> {
    match &args.command {
        AuthCommand::Login { email, password } => {
            let password = resolve_password(password.clone())?;
            let token = ctx
                .client
                .auth()
                .login(&Credentials::new(email.clone(), password))
                .await?;
            session::save(&ctx.session_path, &token)?;
            println!("Logged in as {email}.");
            Ok(0)
        }

        AuthCommand::Logout => {
            // Drop the local token even if the backend call fails; an
            // expired session must still be clearable.
            let result = ctx.client.auth().logout().await;
            session::clear(&ctx.session_path)?;
            result?;
            println!("Logged out.");
            Ok(0)
        }

        AuthCommand::Register {
            name,
            email,
            password,
        } => {
            let password = resolve_password(password.clone())?;
            ctx.client
                .auth()
                .register(&RegisterRequest::new(name.clone(), email.clone(), password))
                .await?;
            println!("Account created for {email}. Run `mynance auth login` to sign in.");
            Ok(0)
        }

        AuthCommand::Whoami => {
            let profile = ctx.client.user().me().await?;
            print_json(&profile)?;
            Ok(0)
        }
    }
}
