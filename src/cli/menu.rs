//! Interactive menu loop.
//!
//! Runs when foxhole is started without a subcommand on a terminal. A failed
//! action (wrong PIN, duplicate name, missing tool) is reported and the menu
//! comes back, matching how an interactive session should behave.

use std::io::{self, IsTerminal};

use crate::cli::{add, list, login, output, prompt, rm};
use crate::core::store::Store;
use crate::error::{Error, Result};

pub fn run(store: &Store, pin_flag: Option<&str>) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(Error::Other(
            "no command specified (run `foxhole --help`)".to_string(),
        ));
    }

    loop {
        println!();
        let items = vec![
            "Add credential".to_string(),
            "List credentials".to_string(),
            "Log in".to_string(),
            "Delete credential".to_string(),
            "Quit".to_string(),
        ];

        let result = match prompt::select("Credential locker", &items)? {
            0 => add::execute(store, pin_flag, None, None, None, None),
            1 => list::execute(store, pin_flag, false),
            2 => login::execute(store, pin_flag, None, None),
            3 => rm::execute(store, pin_flag, None, None, false),
            _ => return Ok(()),
        };

        if let Err(e) = result {
            output::error(&e.to_string());
        }
    }
}
