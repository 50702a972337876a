//! Store path resolution.

use std::path::PathBuf;

use tracing::debug;

use crate::core::config::Settings;
use crate::core::store::Store;
use crate::error::Result;

/// Resolve the store to operate on: `--store`/`FOXHOLE_STORE` override,
/// then `config.toml`, then the platform default.
pub fn store(flag: Option<PathBuf>) -> Result<Store> {
    let path = match flag {
        Some(path) => path,
        None => Settings::load()?.store_path()?,
    };

    debug!(path = %path.display(), "using store");
    Ok(Store::new(path))
}
