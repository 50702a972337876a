//! Foxhole - a PIN-protected credential locker.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use foxhole::cli::{execute, output, Cli};
use foxhole::core::constants;
use foxhole::error::{CipherError, Error, LoginError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("foxhole=debug")
        } else {
            EnvFilter::new("foxhole=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Cipher(CipherError::AuthenticationFailed) => {
                Some("check your PIN and try again")
            }
            Error::Store(StoreError::DuplicateName(_)) => {
                Some("pick another name or remove the existing credential first")
            }
            Error::Store(StoreError::IndexOutOfRange { .. }) => {
                Some("run: foxhole list")
            }
            Error::Login(LoginError::MissingTool { .. }) => {
                Some("install the tool and make sure it is in PATH")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
