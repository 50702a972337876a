//! List command.
//!
//! Shows stored credentials with their index and identity fields. Secrets
//! are never printed, in either output form.

use serde::Serialize;

use crate::cli::{output, prompt};
use crate::core::credential::Credential;
use crate::core::store::Store;
use crate::error::Result;

/// Listing entry without the secret field.
#[derive(Serialize)]
struct Entry<'a> {
    kind: &'a str,
    name: &'a str,
    principal: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    auxiliary: &'a str,
}

impl<'a> From<&'a Credential> for Entry<'a> {
    fn from(cred: &'a Credential) -> Self {
        Self {
            kind: cred.kind.as_str(),
            name: &cred.name,
            principal: &cred.principal,
            auxiliary: &cred.auxiliary,
        }
    }
}

pub fn execute(store: &Store, pin_flag: Option<&str>, json: bool) -> Result<()> {
    let pin = prompt::pin(pin_flag)?;
    let credentials = store.list(&pin)?;

    if json {
        let entries: Vec<Entry> = credentials.iter().map(Entry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if credentials.is_empty() {
        output::dimmed("no credentials stored");
        return Ok(());
    }

    output::header("Credentials");
    for (i, cred) in credentials.iter().enumerate() {
        println!("  {:>2}. {}", i, cred.label());
    }

    Ok(())
}
