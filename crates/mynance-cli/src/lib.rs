//! # mynance-cli -- Terminal consumer of the MyNance API
//!
//! Provides the `mynance` command-line interface. Every subcommand is a
//! thin wrapper over [`mynance_client`]: build the client, call the typed
//! endpoint, print the result as JSON.
//!
//! ## Subcommands
//!
//! - `mynance auth` -- login, logout, register, whoami.
//! - `mynance banks` -- list the supported bank catalog.
//! - `mynance cards` -- credit-card CRUD.
//! - `mynance categories` -- category CRUD.
//! - `mynance expenses` -- expense CRUD.
//!
//! ## Sessions
//!
//! Login stores the backend's session token in a session file; later
//! invocations seed it into the client's cookie store, so a session
//! survives across processes until it expires. When any command gets a
//! 401 back, the client's session-expiry hook tells the user to log in
//! again; the command itself still fails with the 401.

pub mod auth;
pub mod cards;
pub mod categories;
pub mod expenses;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mynance_client::{ApiConfig, MynanceClient};

/// Everything a subcommand handler needs.
pub struct CliContext {
    pub client: MynanceClient,
    pub session_path: PathBuf,
}

/// Build the API client for this invocation.
///
/// Base address: `--api-host` flag, else `MYNANCE_API_HOST`, else the
/// local default. A saved session token (if the session file exists) is
/// seeded so the invocation is authenticated from its first request.
pub fn build_context(api_host: Option<&str>, session_file: Option<&Path>) -> Result<CliContext> {
    let mut config = ApiConfig::from_env()?;
    if let Some(host) = api_host {
        config.base_url = host
            .parse()
            .with_context(|| format!("invalid --api-host value: {host}"))?;
    }

    let session_path = session_file
        .map(Path::to_path_buf)
        .unwrap_or_else(session::default_session_path);

    if let Some(token) = session::load(&session_path)? {
        config = config.with_session_token(token);
    }

    let client = MynanceClient::new(config)?;
    client.on_unauthorized(|| {
        eprintln!("Session expired. Run `mynance auth login` to sign in again.");
    });

    Ok(CliContext {
        client,
        session_path,
    })
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
