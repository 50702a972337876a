//! Login command.
//!
//! Picks a stored credential and hands it to the matching provider
//! integration. The credential is passed through exactly as stored.

use crate::cli::{output, prompt, LoginAction};
use crate::core::credential::{Credential, Kind};
use crate::core::login::{aws, git};
use crate::core::store::Store;
use crate::error::{Error, Result, StoreError};

pub fn execute(
    store: &Store,
    pin_flag: Option<&str>,
    name: Option<String>,
    action: Option<LoginAction>,
) -> Result<()> {
    let pin = prompt::pin(pin_flag)?;
    let credentials = store.list(&pin)?;

    if credentials.is_empty() {
        output::dimmed("no credentials stored");
        return Ok(());
    }

    let cred = match name {
        Some(name) => credentials
            .iter()
            .find(|c| c.name == name)
            .ok_or(StoreError::NotFound(name))?,
        None => {
            let labels: Vec<String> = credentials.iter().map(|c| c.label()).collect();
            let choice = prompt::select("Log in with", &labels)?;
            &credentials[choice]
        }
    };

    println!("logging in with {}", output::key(&cred.name));

    match cred.kind {
        Kind::Aws => aws_login(cred, action),
        Kind::Git => git_login(cred, action),
    }
}

fn aws_login(cred: &Credential, action: Option<LoginAction>) -> Result<()> {
    let action = match action {
        Some(a) => a,
        None => {
            let items = vec![
                "Configure AWS CLI profile".to_string(),
                "Write env script".to_string(),
                "Launch shell with credentials".to_string(),
                "Test connection only".to_string(),
            ];
            match prompt::select("AWS login option", &items)? {
                0 => LoginAction::Profile,
                1 => LoginAction::Env,
                2 => LoginAction::Shell,
                _ => LoginAction::Test,
            }
        }
    };

    match action {
        LoginAction::Profile => {
            let profile = prompt::text_with_default("Profile name", &cred.name)?;
            aws::configure_profile(cred, &profile)?;
            output::success(&format!("configured profile {}", output::key(&profile)));
            output::hint(&format!("use with: aws --profile {} <command>", profile));
        }
        LoginAction::Env => {
            let path = aws::write_env_script(cred)?;
            output::success(&format!("wrote {}", path.display()));
            output::hint(&format!("run: source {}", path.display()));
        }
        LoginAction::Shell => {
            println!("AWS credentials are available in this shell; exit to return");
            let code = aws::spawn_shell(cred)?;
            output::dimmed(&format!("shell exited with code {}", code));
        }
        LoginAction::Test => {
            let identity = aws::test_connection(cred)?;
            output::success("connection ok");
            print!("{}", identity);
        }
        other => {
            return Err(Error::Other(format!(
                "action {:?} is not available for an aws credential",
                other
            )))
        }
    }

    Ok(())
}

fn git_login(cred: &Credential, action: Option<LoginAction>) -> Result<()> {
    let action = match action {
        Some(a) => a,
        None => {
            let items = vec![
                "Set global git user name".to_string(),
                "Login to GitHub CLI".to_string(),
            ];
            match prompt::select("Git login option", &items)? {
                0 => LoginAction::GitUser,
                _ => LoginAction::Gh,
            }
        }
    };

    match action {
        LoginAction::GitUser => {
            git::configure_user(cred)?;
            output::success("git user name configured globally");
            output::hint("for HTTPS authentication, use the stored token as the password");
        }
        LoginAction::Gh => {
            git::gh_auth_login(cred)?;
            output::success("GitHub CLI login successful");
        }
        other => {
            return Err(Error::Other(format!(
                "action {:?} is not available for a git credential",
                other
            )))
        }
    }

    Ok(())
}
