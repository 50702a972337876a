//! Git and GitHub CLI integration.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{require_tool, run_checked};
use crate::core::credential::Credential;
use crate::error::{LoginError, Result};

/// Set the global git user name from the credential.
pub fn configure_user(cred: &Credential) -> Result<()> {
    let git = require_tool("git")?;
    debug!("setting global git user.name");

    run_checked(
        "git",
        Command::new(git).args(["config", "--global", "user.name", &cred.principal]),
    )
}

/// Authenticate the GitHub CLI by piping the stored token to
/// `gh auth login --with-token`.
pub fn gh_auth_login(cred: &Credential) -> Result<()> {
    let gh = require_tool("gh")?;
    debug!("logging in to gh");

    let mut child = Command::new(gh)
        .args(["auth", "login", "--with-token"])
        .stdin(Stdio::piped())
        .spawn()?;

    // The token goes over stdin, never argv.
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(cred.secret.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(LoginError::CommandFailed {
            tool: "gh".to_string(),
            status: status.to_string(),
        }
        .into());
    }

    Ok(())
}
