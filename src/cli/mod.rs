//! Command-line interface.

pub mod add;
pub mod completions;
pub mod list;
pub mod login;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod resolve;
pub mod rm;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::credential::Kind;
use crate::error::Result;

/// Foxhole - a PIN-protected credential locker.
#[derive(Parser)]
#[command(
    name = "foxhole",
    about = "A PIN-protected credential locker for cloud and version-control accounts",
    version,
    after_help = "Dig in. Keep your keys covered. 🦊"
)]
pub struct Cli {
    /// Omit the subcommand to get the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the encrypted store file
    #[arg(long, global = true, env = "FOXHOLE_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// PIN unlocking the store (prompted when omitted)
    #[arg(long, global = true, env = "FOXHOLE_PIN", hide_env_values = true)]
    pub pin: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a credential (prompts for anything not given as a flag)
    Add {
        /// Credential kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Unique display name (e.g. aws-project1, github-self)
        #[arg(long)]
        name: Option<String>,
        /// Access key ID (aws) or username (git)
        #[arg(long)]
        principal: Option<String>,
        /// Region (aws only)
        #[arg(long)]
        auxiliary: Option<String>,
    },

    /// List stored credentials
    List {
        /// Output as JSON (secrets excluded)
        #[arg(long)]
        json: bool,
    },

    /// Remove a credential
    Rm {
        /// Credential name
        #[arg(long, conflicts_with = "index")]
        name: Option<String>,
        /// Position as shown by `list`
        #[arg(long)]
        index: Option<usize>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Log in with a stored credential
    Login {
        /// Credential name (interactive pick when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Login action to run (interactive pick when omitted)
        #[arg(long, value_enum)]
        action: Option<LoginAction>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Credential kinds accepted on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    Aws,
    Git,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Aws => Kind::Aws,
            KindArg::Git => Kind::Git,
        }
    }
}

/// Provider login actions.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginAction {
    /// Configure an aws CLI profile
    Profile,
    /// Write a sourceable aws env script
    Env,
    /// Spawn a shell with aws credentials exported
    Shell,
    /// Test the aws credential against STS
    Test,
    /// Set the global git user name
    GitUser,
    /// Authenticate the GitHub CLI with the stored token
    Gh,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    // Completions need no store access.
    if let Some(Command::Completions { shell }) = &cli.command {
        return completions::execute(shell.clone());
    }

    let store = resolve::store(cli.store)?;
    let pin = cli.pin.as_deref();

    match cli.command {
        None => menu::run(&store, pin),
        Some(Command::Add {
            kind,
            name,
            principal,
            auxiliary,
        }) => add::execute(&store, pin, kind.map(Into::into), name, principal, auxiliary),
        Some(Command::List { json }) => list::execute(&store, pin, json),
        Some(Command::Rm { name, index, yes }) => rm::execute(&store, pin, name, index, yes),
        Some(Command::Login { name, action }) => login::execute(&store, pin, name, action),
        Some(Command::Completions { .. }) => unreachable!("handled above"),
    }
}
