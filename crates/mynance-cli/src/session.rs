//! Session-file persistence for the CLI.
//!
//! The backend's session rides in an HttpOnly cookie; inside one process
//! the client's cookie store carries it, but a CLI lives one command at a
//! time. Login writes the raw token value to a file with owner-only
//! permissions; later invocations read it back and seed the client.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mynance_client::SessionToken;

/// Resolve the session file path.
///
/// `MYNANCE_SESSION_FILE` wins; otherwise `$HOME/.mynance-session`,
/// falling back to the current directory when `HOME` is unset.
pub fn default_session_path() -> PathBuf {
    if let Ok(path) = std::env::var("MYNANCE_SESSION_FILE") {
        return PathBuf::from(path);
    }
    match std::env::var("HOME") {
        Ok(home) => Path::new(&home).join(".mynance-session"),
        Err(_) => PathBuf::from(".mynance-session"),
    }
}

/// Read a saved session token. `Ok(None)` when no session file exists.
pub fn load(path: &Path) -> Result<Option<SessionToken>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let token = contents.trim();
            if token.is_empty() {
                Ok(None)
            } else {
                Ok(Some(SessionToken::new(token)))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read session file {}", path.display())),
    }
}

/// Persist a session token with owner-only permissions.
pub fn save(path: &Path, token: &SessionToken) -> Result<()> {
    fs::write(path, token.as_str())
        .with_context(|| format!("failed to write session file {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).with_context(|| {
            format!("failed to set permissions on session file {}", path.display())
        })?;
    }

    Ok(())
}

/// Remove the session file. Missing files are fine; logout after an
/// expired session should not fail.
pub fn clear(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("failed to remove session file {}", path.display()))
        }
    }
}
