//! Interactive input collection.
//!
//! Secrets (PIN, passwords) are read without echo; identifiers are read as
//! plain text. Every helper falls back to reading a line from stdin when it
//! is not a terminal, so commands stay scriptable.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Confirm, Input, Password, Select};
use zeroize::Zeroizing;

use crate::error::{Result, ValidationError};

/// Resolve the PIN: flag/env value, hidden prompt, or piped stdin.
///
/// # Errors
///
/// Returns `ValidationError::EmptyPin` for an empty PIN.
pub fn pin(flag: Option<&str>) -> Result<Zeroizing<String>> {
    let value = match flag {
        Some(p) => p.to_string(),
        None if io::stdin().is_terminal() => Password::new().with_prompt("PIN").interact()?,
        None => read_line()?,
    };

    if value.is_empty() {
        return Err(ValidationError::EmptyPin.into());
    }

    Ok(Zeroizing::new(value))
}

/// Collect a secret value without echoing it.
pub fn secret(label: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        Ok(Password::new().with_prompt(label).interact()?)
    } else {
        read_line()
    }
}

/// Collect a plain text value.
pub fn text(label: &str) -> Result<String> {
    require_terminal(label)?;
    Ok(Input::<String>::new().with_prompt(label).interact_text()?)
}

/// Collect a plain text value with a pre-filled default.
pub fn text_with_default(label: &str, default: &str) -> Result<String> {
    require_terminal(label)?;
    Ok(Input::<String>::new()
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()?)
}

/// Collect an optional plain text value (empty input allowed).
pub fn optional_text(label: &str) -> Result<String> {
    require_terminal(label)?;
    Ok(Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()?)
}

/// Pick one item from a list, returning its index.
pub fn select(label: &str, items: &[String]) -> Result<usize> {
    require_terminal(label)?;
    Ok(Select::new()
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact()?)
}

/// Read one trimmed line from stdin (piped input).
fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn require_terminal(label: &str) -> Result<()> {
    if io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(crate::error::Error::Other(format!(
            "{} required in non-interactive mode",
            label
        )))
    }
}
