//! Add command.
//!
//! Collects whatever fields were not given as flags, secret always hidden,
//! then appends to the store.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::credential::{Credential, Kind};
use crate::core::store::Store;
use crate::error::Result;

pub fn execute(
    store: &Store,
    pin_flag: Option<&str>,
    kind: Option<Kind>,
    name: Option<String>,
    principal: Option<String>,
    auxiliary: Option<String>,
) -> Result<()> {
    let kind = match kind {
        Some(k) => k,
        None => {
            let items = vec!["aws".to_string(), "git".to_string()];
            match prompt::select("Kind", &items)? {
                0 => Kind::Aws,
                _ => Kind::Git,
            }
        }
    };

    let name = match name {
        Some(n) => n,
        None => prompt::text("Name (e.g. aws-project1, github-self)")?,
    };

    let principal = match principal {
        Some(p) => p,
        None => match kind {
            Kind::Aws => prompt::text("AWS Access Key ID")?,
            Kind::Git => prompt::text_with_default("Git username", &whoami::username())?,
        },
    };

    let secret = match kind {
        Kind::Aws => prompt::secret("AWS Secret Access Key")?,
        Kind::Git => prompt::secret("Git password/token")?,
    };

    let auxiliary = match auxiliary {
        Some(a) => a,
        None => match kind {
            Kind::Aws => prompt::optional_text("AWS region (optional)")?,
            Kind::Git => String::new(),
        },
    };

    let pin = prompt::pin(pin_flag)?;

    info!(name = %name, kind = %kind, "adding credential");
    store.add(
        &pin,
        Credential {
            kind,
            name: name.clone(),
            principal,
            secret,
            auxiliary,
        },
    )?;

    output::success(&format!("added {}", output::key(&name)));
    Ok(())
}
