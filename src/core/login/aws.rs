//! AWS CLI integration.
//!
//! Four ways to put a stored access key to work: configure a named CLI
//! profile, write a sourceable env script, spawn a subshell with the
//! credentials exported, or just verify them against STS.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::{require_tool, run_checked};
use crate::core::credential::Credential;
use crate::error::{LoginError, Result};

/// Configure an `aws` CLI profile from the credential.
///
/// Runs `aws configure set` for the access key, the secret key, and the
/// region (when one is stored).
pub fn configure_profile(cred: &Credential, profile: &str) -> Result<()> {
    let aws = require_tool("aws")?;
    debug!(profile, "configuring aws profile");

    run_checked(
        "aws",
        Command::new(&aws).args([
            "configure",
            "set",
            "aws_access_key_id",
            &cred.principal,
            "--profile",
            profile,
        ]),
    )?;

    run_checked(
        "aws",
        Command::new(&aws).args([
            "configure",
            "set",
            "aws_secret_access_key",
            &cred.secret,
            "--profile",
            profile,
        ]),
    )?;

    if !cred.auxiliary.is_empty() {
        run_checked(
            "aws",
            Command::new(&aws).args([
                "configure",
                "set",
                "region",
                &cred.auxiliary,
                "--profile",
                profile,
            ]),
        )?;
    }

    Ok(())
}

/// Verify the credential with `aws sts get-caller-identity`.
///
/// Returns the identity JSON printed by the CLI.
pub fn test_connection(cred: &Credential) -> Result<String> {
    let aws = require_tool("aws")?;
    debug!("testing aws connection");

    let mut cmd = Command::new(&aws);
    cmd.args(["sts", "get-caller-identity"]);
    apply_env(&mut cmd, cred);

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(LoginError::CommandFailed {
            tool: "aws".to_string(),
            status: output.status.to_string(),
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Spawn an interactive shell with `AWS_*` variables exported.
///
/// Returns the shell's exit code once the user leaves it.
pub fn spawn_shell(cred: &Credential) -> Result<i32> {
    debug!("spawning shell with aws credentials");

    let mut cmd = if cfg!(windows) {
        Command::new("cmd")
    } else {
        Command::new(std::env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string()))
    };
    apply_env(&mut cmd, cred);

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}

/// Write a sourceable env script (`aws_env.sh` / `aws_env.bat`) into the
/// current directory and return its path.
pub fn write_env_script(cred: &Credential) -> Result<PathBuf> {
    let (path, contents) = if cfg!(windows) {
        let mut script = format!(
            "@echo off\r\nset AWS_ACCESS_KEY_ID={}\r\nset AWS_SECRET_ACCESS_KEY={}\r\n",
            cred.principal, cred.secret
        );
        if !cred.auxiliary.is_empty() {
            script.push_str(&format!("set AWS_DEFAULT_REGION={}\r\n", cred.auxiliary));
        }
        (PathBuf::from("aws_env.bat"), script)
    } else {
        let mut script = format!(
            "#!/bin/sh\nexport AWS_ACCESS_KEY_ID=\"{}\"\nexport AWS_SECRET_ACCESS_KEY=\"{}\"\n",
            cred.principal, cred.secret
        );
        if !cred.auxiliary.is_empty() {
            script.push_str(&format!(
                "export AWS_DEFAULT_REGION=\"{}\"\n",
                cred.auxiliary
            ));
        }
        (PathBuf::from("aws_env.sh"), script)
    };

    std::fs::write(&path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o700))?;
    }

    debug!(path = %path.display(), "wrote env script");
    Ok(path)
}

/// Export the credential into a command's environment.
fn apply_env(cmd: &mut Command, cred: &Credential) {
    cmd.env("AWS_ACCESS_KEY_ID", &cred.principal);
    cmd.env("AWS_SECRET_ACCESS_KEY", &cred.secret);
    if !cred.auxiliary.is_empty() {
        cmd.env("AWS_DEFAULT_REGION", &cred.auxiliary);
    }
}
