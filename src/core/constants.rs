//! Constants used throughout foxhole.
//!
//! Centralizes magic strings and configuration values.

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "foxhole";

/// Encrypted store file name (credentials.enc).
pub const STORE_FILE: &str = "credentials.enc";

/// Optional settings file name (config.toml).
pub const CONFIG_FILE: &str = "config.toml";

/// Env var holding the log filter (e.g. `foxhole=debug`).
pub const LOG_ENV: &str = "FOXHOLE_LOG";
