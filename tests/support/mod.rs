//! Test support utilities for foxhole integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Default PIN used across tests.
pub const PIN: &str = "1234";

/// Test environment with an isolated store file.
///
/// Each test gets its own temporary directory; the store path is injected
/// into child processes via `FOXHOLE_STORE`, so no process-global state is
/// mutated and tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding the store file
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path of the store file inside the temp directory.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("credentials.enc")
    }

    /// Create a test environment with one git credential added.
    pub fn with_credential(name: &str) -> Self {
        let t = Self::new();
        let output = t.add_git(name, "user", "token");
        assert!(
            output.status.success(),
            "failed to add credential: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }
}
