//! Remove command.
//!
//! Removes a credential by name, by index as shown by `list`, or by
//! interactive pick. Asks for confirmation unless `--yes` or stdin is not a
//! terminal.

use std::io::{self, IsTerminal};

use crate::cli::{output, prompt};
use crate::core::store::Store;
use crate::error::Result;

pub fn execute(
    store: &Store,
    pin_flag: Option<&str>,
    name: Option<String>,
    index: Option<usize>,
    yes: bool,
) -> Result<()> {
    let pin = prompt::pin(pin_flag)?;

    let removed = match (name, index) {
        (Some(name), _) => {
            if !confirmed(&name, yes)? {
                output::dimmed("deletion cancelled");
                return Ok(());
            }
            store.remove_named(&pin, &name)?
        }
        (None, Some(index)) => {
            if !confirmed(&format!("credential at index {}", index), yes)? {
                output::dimmed("deletion cancelled");
                return Ok(());
            }
            store.remove_at(&pin, index)?
        }
        (None, None) => {
            let credentials = store.list(&pin)?;
            if credentials.is_empty() {
                output::dimmed("no credentials stored");
                return Ok(());
            }

            let labels: Vec<String> = credentials.iter().map(|c| c.label()).collect();
            let choice = prompt::select("Delete which credential?", &labels)?;
            let target = credentials[choice].name.clone();

            if !confirmed(&target, yes)? {
                output::dimmed("deletion cancelled");
                return Ok(());
            }
            // Remove by name so the selection stays unambiguous even though
            // the store is re-read.
            store.remove_named(&pin, &target)?
        }
    };

    output::success(&format!("removed {}", output::key(&removed.name)));
    Ok(())
}

fn confirmed(target: &str, yes: bool) -> Result<bool> {
    if yes || !io::stdin().is_terminal() {
        return Ok(true);
    }
    prompt::confirm(&format!("Delete '{}'?", target))
}
