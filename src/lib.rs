//! Foxhole - a PIN-protected credential locker for cloud and version-control accounts.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── menu          # Interactive menu loop (default when no subcommand)
//! │   ├── add           # Add a credential
//! │   ├── list          # List stored credentials
//! │   ├── rm            # Remove a credential by name or index
//! │   ├── login         # Run a provider login action
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher        # PIN-keyed AES-256-GCM envelope
//!     ├── credential    # Credential record and kind
//!     ├── store         # Encrypted store file (load/mutate/save)
//!     ├── config        # config.toml and store path resolution
//!     └── login/        # aws / git / gh integrations
//! ```
//!
//! # Features
//!
//! - Whole-store authenticated encryption under a PIN-derived key
//! - Atomic store rewrites with owner-only file permissions
//! - One-shot logins into the aws, git, and gh CLIs
//! - Interactive menu or scriptable subcommands

pub mod cli;
pub mod core;
pub mod error;
