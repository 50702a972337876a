//! Provider login integrations.
//!
//! Thin wrappers around the external `aws`, `git`, and `gh` command-line
//! tools. Credentials are handed over exactly as stored; secrets go to the
//! child process via environment variables or stdin wherever the tool
//! allows it.

pub mod aws;
pub mod git;

use std::path::PathBuf;
use std::process::Command;

use crate::error::{LoginError, Result};

/// Locate an external tool, failing with an install hint if absent.
pub(crate) fn require_tool(tool: &str) -> Result<PathBuf> {
    which::which(tool).map_err(|_| {
        LoginError::MissingTool {
            tool: tool.to_string(),
        }
        .into()
    })
}

/// Run a command to completion, mapping a non-zero exit into `CommandFailed`.
pub(crate) fn run_checked(tool: &str, cmd: &mut Command) -> Result<()> {
    let status = cmd.status()?;
    if !status.success() {
        return Err(LoginError::CommandFailed {
            tool: tool.to_string(),
            status: status.to_string(),
        }
        .into());
    }
    Ok(())
}
